use super::catalog::matching_tags;
use super::models::{cell, Champion, ChampionMap, Row, Tag};
use super::numeric::parse_int;

// Roster columns: name, origin text, class text, cost
const NAME: usize = 0;
const ORIGIN: usize = 1;
const CLASS: usize = 2;
const COST: usize = 3;

/// Build the base champion records from the roster table.
///
/// Tags are attributed by substring: a tag belongs to a champion when it
/// appears anywhere in that row's origin or class cell. A name seen twice is
/// overwritten by the later row.
pub fn extract_roster(rows: &[Row], origins: &[Tag], classes: &[Tag]) -> ChampionMap {
    let mut champions = ChampionMap::new();

    for row in rows {
        champions.insert(Champion::new(
            cell(row, NAME).to_string(),
            matching_tags(origins, cell(row, ORIGIN)),
            matching_tags(classes, cell(row, CLASS)),
            parse_int(cell(row, COST)),
        ));
    }

    champions
}
