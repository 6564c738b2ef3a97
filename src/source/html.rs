use scraper::{ElementRef, Html, Selector};

use super::fetch::PageFetcher;
use super::{NavigationTarget, TableSource, ViewState};
use crate::dataset::models::Row;
use crate::error::AppError;

const TABLE_BODY: &str = ".rt-tbody";
const TABLE_ROW: &str = ".rt-tr";
const TABLE_CELL: &str = ".rt-td";
// react-table fills short pages with empty rows carrying this class
const PAD_ROW_CLASS: &str = "-padRow";

/// A react-table page source: each navigation fetches and parses the page for
/// the new view, and `current_rows` hands back that parsed table.
pub struct HtmlSource<F> {
    fetcher: F,
    state: ViewState,
    rows: Option<Vec<Row>>,
}

impl<F: PageFetcher> HtmlSource<F> {
    pub fn new(fetcher: F) -> Self {
        HtmlSource {
            fetcher,
            state: ViewState::default(),
            rows: None,
        }
    }
}

impl<F: PageFetcher> TableSource for HtmlSource<F> {
    fn current_rows(&mut self) -> Result<Vec<Row>, AppError> {
        self.rows
            .clone()
            .ok_or_else(|| AppError::navigation("current table", "no view is open yet"))
    }

    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), AppError> {
        let next = self.state.apply(target)?;
        let rows = self
            .fetcher
            .fetch(&next)
            .and_then(|html| parse_table(&html))
            .map_err(|e| AppError::navigation(target, e))?;

        self.state = next;
        self.rows = Some(rows);
        Ok(())
    }
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::HtmlError(format!("bad selector {}: {}", css, e)))
}

/// Cell text of the first react-table body in `html`, row-major.
pub fn parse_table(html: &str) -> Result<Vec<Row>, AppError> {
    let document = Html::parse_document(html);
    let body_sel = selector(TABLE_BODY)?;
    let row_sel = selector(TABLE_ROW)?;
    let cell_sel = selector(TABLE_CELL)?;

    let body = document
        .select(&body_sel)
        .next()
        .ok_or_else(|| AppError::HtmlError(format!("no {} element on page", TABLE_BODY)))?;

    let rows: Vec<Row> = body
        .select(&row_sel)
        .filter(|row| !row.value().classes().any(|c| c == PAD_ROW_CLASS))
        .map(|row| row.select(&cell_sel).map(cell_text).collect())
        .collect();

    Ok(rows)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
