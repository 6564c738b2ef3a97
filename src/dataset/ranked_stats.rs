use super::models::{cell, ChampionMap, DefenseStats, OffenseStats, Rank, RankStats, Row};
use super::numeric::{parse_float, parse_int};
use crate::error::AppError;
use crate::source::StatCategory;

/// Write one offense row into `champions`, replacing whatever that rank held.
///
/// Row layout: name, dps, attack speed, damage, range.
pub fn apply_offense_row(
    champions: &mut ChampionMap,
    rank: Rank,
    row: &[String],
) -> Result<(), AppError> {
    let name = cell(row, 0);
    let champion = champions
        .get_mut(name)
        .ok_or_else(|| lookup_failure(name, StatCategory::Offense, rank))?;

    let offense = OffenseStats {
        dps: parse_float(cell(row, 1)),
        attack_speed: parse_float(cell(row, 2)),
        damage: parse_float(cell(row, 3)),
        range: parse_int(cell(row, 4)),
    };
    champion.rank.insert(rank, RankStats::from_offense(offense));
    Ok(())
}

/// Merge one defense row into the rank slot the offense pass created.
///
/// Row layout: name, health, mana, armor, magic resist.
pub fn apply_defense_row(
    champions: &mut ChampionMap,
    rank: Rank,
    row: &[String],
) -> Result<(), AppError> {
    let name = cell(row, 0);
    let champion = champions
        .get_mut(name)
        .ok_or_else(|| lookup_failure(name, StatCategory::Defense, rank))?;

    let stats = champion
        .rank
        .get_mut(&rank)
        .ok_or_else(|| AppError::MergeFailure {
            name: name.to_string(),
            rank,
        })?;

    stats.defense = Some(DefenseStats {
        health: parse_float(cell(row, 1)),
        mana: parse_float(cell(row, 2)),
        armor: parse_float(cell(row, 3)),
        mr: parse_int(cell(row, 4)),
    });
    Ok(())
}

fn lookup_failure(name: &str, category: StatCategory, rank: Rank) -> AppError {
    AppError::LookupFailure {
        name: name.to_string(),
        category,
        rank,
    }
}

/// First stats pass. Only a roster can start it, and the defense pass is only
/// reachable by finishing it.
#[derive(Debug)]
pub struct OffensePass {
    champions: ChampionMap,
}

impl OffensePass {
    pub fn new(roster: ChampionMap) -> Self {
        OffensePass { champions: roster }
    }

    pub fn merge(&mut self, rank: Rank, rows: &[Row]) -> Result<usize, AppError> {
        for row in rows {
            apply_offense_row(&mut self.champions, rank, row)?;
        }
        Ok(rows.len())
    }

    pub fn finish(self) -> DefensePass {
        DefensePass {
            champions: self.champions,
        }
    }
}

#[derive(Debug)]
pub struct DefensePass {
    champions: ChampionMap,
}

impl DefensePass {
    pub fn merge(&mut self, rank: Rank, rows: &[Row]) -> Result<usize, AppError> {
        for row in rows {
            apply_defense_row(&mut self.champions, rank, row)?;
        }
        Ok(rows.len())
    }

    pub fn finish(self) -> ChampionMap {
        self.champions
    }
}
