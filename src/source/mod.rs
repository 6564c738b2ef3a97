pub mod fetch;
pub mod html;
pub mod memory;
pub mod navigator;

use std::fmt;

use crate::dataset::models::{Rank, Row};
use crate::error::AppError;

/// Something that shows one table at a time and can be steered to another.
///
/// `navigate` blocks until the new view has settled; `current_rows` then
/// returns a snapshot of it, row-major.
pub trait TableSource {
    fn current_rows(&mut self) -> Result<Vec<Row>, AppError>;
    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), AppError>;
}

impl<T: TableSource + ?Sized> TableSource for &mut T {
    fn current_rows(&mut self) -> Result<Vec<Row>, AppError> {
        (**self).current_rows()
    }

    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), AppError> {
        (**self).navigate(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Offense,
    Defense,
}

impl StatCategory {
    pub fn slug(self) -> &'static str {
        match self {
            StatCategory::Offense => "offense",
            StatCategory::Defense => "defense",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Origins,
    Classes,
    Champions,
    Stats(StatCategory),
}

impl View {
    pub fn slug(self) -> &'static str {
        match self {
            View::Origins => "origins",
            View::Classes => "classes",
            View::Champions => "champions",
            View::Stats(_) => "champion-stats",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Origins => f.write_str("Origins"),
            View::Classes => f.write_str("Classes"),
            View::Champions => f.write_str("Champions"),
            View::Stats(StatCategory::Offense) => f.write_str("Champion Stats (Offense)"),
            View::Stats(StatCategory::Defense) => f.write_str("Champion Stats (Defense)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    SelectTab(View),
    SelectRank(Rank),
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::SelectTab(view) => write!(f, "tab '{}'", view),
            NavigationTarget::SelectRank(rank) => write!(f, "rank {}", rank),
        }
    }
}

/// Which table is showing: a view, plus the selected rank on stats views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub view: Option<View>,
    pub rank: Option<Rank>,
}

impl ViewState {
    /// The state reached by performing `target` from here.
    pub fn apply(&self, target: &NavigationTarget) -> Result<ViewState, AppError> {
        match *target {
            NavigationTarget::SelectTab(view @ View::Stats(_)) => {
                let rank = match self.view {
                    Some(View::Stats(_)) => self.rank,
                    _ => None,
                };
                Ok(ViewState {
                    view: Some(view),
                    rank: Some(rank.unwrap_or(Rank::One)),
                })
            }
            NavigationTarget::SelectTab(view) => Ok(ViewState {
                view: Some(view),
                rank: None,
            }),
            NavigationTarget::SelectRank(rank) => match self.view {
                Some(view @ View::Stats(_)) => Ok(ViewState {
                    view: Some(view),
                    rank: Some(rank),
                }),
                Some(view) => Err(AppError::navigation(
                    target,
                    format!("the {} view has no rank selector", view),
                )),
                None => Err(AppError::navigation(target, "no view is open yet")),
            },
        }
    }

    /// Stable name of this state, e.g. `champions` or `champion-stats-defense-2`.
    pub fn page_key(&self) -> Result<String, AppError> {
        match (self.view, self.rank) {
            (Some(View::Stats(category)), Some(rank)) => Ok(format!(
                "{}-{}-{}",
                View::Stats(category).slug(),
                category.slug(),
                rank
            )),
            (Some(view), _) => Ok(view.slug().to_string()),
            (None, _) => Err(AppError::navigation("current table", "no view is open yet")),
        }
    }
}
