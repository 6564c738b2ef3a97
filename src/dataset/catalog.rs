use super::models::{cell, Row, Tag};

/// One tag per reference-table row, taken from the first cell, in row order.
pub fn build_catalog(rows: &[Row]) -> Vec<Tag> {
    rows.iter().map(|row| cell(row, 0).to_string()).collect()
}

/// The tags from `catalog` that occur in `text`, keeping catalog order.
pub fn matching_tags(catalog: &[Tag], text: &str) -> Vec<Tag> {
    catalog
        .iter()
        .filter(|tag| text.contains(tag.as_str()))
        .cloned()
        .collect()
}
