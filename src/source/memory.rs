use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{NavigationTarget, TableSource, ViewState};
use crate::dataset::models::Row;
use crate::error::AppError;

/// Tables held in memory, keyed by page key (`origins`, `champion-stats-offense-1`, ...).
///
/// A fixture file is a JSON object of the same shape:
/// `{ "origins": [["Wild"], ["Ocean"]], "classes": [...], ... }`.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: HashMap<String, Vec<Row>>,
    state: ViewState,
    history: Vec<NavigationTarget>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource::default()
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let tables: HashMap<String, Vec<Row>> = serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse fixture: {}", e)))?;
        Ok(MemorySource {
            tables,
            ..MemorySource::default()
        })
    }

    pub fn from_fixture(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read fixture {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, page_key: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(page_key.into(), rows);
    }

    /// Every navigation performed so far, in order.
    pub fn history(&self) -> &[NavigationTarget] {
        &self.history
    }
}

impl TableSource for MemorySource {
    fn current_rows(&mut self) -> Result<Vec<Row>, AppError> {
        let key = self.state.page_key()?;
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::navigation(&key, "no table loaded for this page"))
    }

    fn navigate(&mut self, target: &NavigationTarget) -> Result<(), AppError> {
        let next = self.state.apply(target)?;
        let key = next.page_key()?;
        if !self.tables.contains_key(&key) {
            return Err(AppError::navigation(
                target,
                format!("no table for page '{}'", key),
            ));
        }
        self.state = next;
        self.history.push(*target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::models::Rank;
    use crate::source::{StatCategory, View};

    const FIXTURE: &str = r#"{
        "origins": [["Wild"], ["Ocean"]],
        "champion-stats-offense-1": [["Ahri", "1.2", "0.8", "50", "4"]],
        "champion-stats-offense-2": [["Ahri", "2.4", "0.8", "90", "4"]]
    }"#;

    #[test]
    fn fixture_tables_follow_page_keys() {
        let mut source = MemorySource::from_json(FIXTURE).unwrap();

        source
            .navigate(&NavigationTarget::SelectTab(View::Origins))
            .unwrap();
        assert_eq!(source.current_rows().unwrap().len(), 2);

        source
            .navigate(&NavigationTarget::SelectTab(View::Stats(StatCategory::Offense)))
            .unwrap();
        source
            .navigate(&NavigationTarget::SelectRank(Rank::Two))
            .unwrap();
        assert_eq!(source.current_rows().unwrap()[0][1], "2.4");
        assert_eq!(source.history().len(), 3);
    }

    #[test]
    fn missing_page_cannot_settle() {
        let mut source = MemorySource::from_json(FIXTURE).unwrap();
        let err = source.navigate(&NavigationTarget::SelectTab(View::Classes));
        assert!(matches!(err, Err(AppError::NavigationFailure { .. })));
        assert!(source.history().is_empty());
    }

    #[test]
    fn fixture_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        fs::write(&path, FIXTURE).unwrap();

        let mut source = MemorySource::from_fixture(&path).unwrap();
        source
            .navigate(&NavigationTarget::SelectTab(View::Origins))
            .unwrap();
        assert_eq!(source.current_rows().unwrap()[1], vec!["Ocean"]);
    }

    #[test]
    fn malformed_fixture_is_json_error() {
        assert!(matches!(
            MemorySource::from_json("[1, 2]"),
            Err(AppError::JsonError(_))
        ));
    }
}
