use std::time::Instant;

use super::{NavigationTarget, TableSource, ViewState};
use crate::dataset::models::Row;
use crate::display::output::{display_info, display_read_timing};
use crate::error::AppError;

/// Drives a `TableSource` through explicit view transitions.
///
/// Transitions are checked against `ViewState` before the source is touched,
/// so an impossible step (a rank click with no stats table open) fails without
/// disturbing whatever is currently visible.
pub struct Navigator<S> {
    source: S,
    state: ViewState,
}

impl<S: TableSource> Navigator<S> {
    pub fn new(source: S) -> Self {
        Navigator {
            source,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn goto(&mut self, target: NavigationTarget) -> Result<(), AppError> {
        let next = self.state.apply(&target)?;
        self.source.navigate(&target)?;
        self.state = next;
        Ok(())
    }

    pub fn read_rows(&mut self) -> Result<Vec<Row>, AppError> {
        if self.state.view.is_none() {
            return Err(AppError::navigation("current table", "no view is open yet"));
        }
        display_info("Getting table data");
        let started = Instant::now();
        let rows = self.source.current_rows()?;
        display_read_timing(rows.len(), started.elapsed());
        Ok(rows)
    }
}
