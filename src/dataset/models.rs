use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub type Tag = String;
pub type Row = Vec<String>;

/// Text of cell `idx`, or "" when the row is shorter than that.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::One, Rank::Two, Rank::Three];

    pub fn number(self) -> u8 {
        match self {
            Rank::One => 1,
            Rank::Two => 2,
            Rank::Three => 3,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// Offense table columns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenseStats {
    pub dps: f64,
    pub attack_speed: f64,
    pub damage: f64,
    pub range: Option<i64>,
}

// Defense table columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefenseStats {
    pub health: f64,
    pub mana: f64,
    pub armor: f64,
    pub mr: Option<i64>,
}

/// Combat profile of one champion at one rank.
///
/// The offense half is always present once the slot exists; the defense half
/// is merged in later and stays `None` until then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankStats {
    #[serde(flatten)]
    pub offense: OffenseStats,
    #[serde(flatten)]
    pub defense: Option<DefenseStats>,
}

impl RankStats {
    pub fn from_offense(offense: OffenseStats) -> Self {
        RankStats {
            offense,
            defense: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.defense.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Champion {
    pub name: String,
    pub origin: Vec<Tag>,
    pub class: Vec<Tag>,
    pub cost: Option<i64>,
    pub rank: BTreeMap<Rank, RankStats>,
}

impl Champion {
    pub fn new(name: String, origin: Vec<Tag>, class: Vec<Tag>, cost: Option<i64>) -> Self {
        Champion {
            name,
            origin,
            class,
            cost,
            rank: BTreeMap::new(),
        }
    }

    /// Ranks that are missing or still lack their defense half.
    pub fn incomplete_ranks(&self) -> Vec<Rank> {
        Rank::ALL
            .iter()
            .copied()
            .filter(|r| !self.rank.get(r).map(RankStats::is_complete).unwrap_or(false))
            .collect()
    }
}

/// Champions keyed by name, kept in the order names were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChampionMap {
    champions: Vec<Champion>,
    index: HashMap<String, usize>,
}

impl ChampionMap {
    pub fn new() -> Self {
        ChampionMap::default()
    }

    /// Insert a champion. A name that is already present is replaced in place.
    pub fn insert(&mut self, champion: Champion) {
        match self.index.get(&champion.name) {
            Some(&slot) => self.champions[slot] = champion,
            None => {
                self.index
                    .insert(champion.name.clone(), self.champions.len());
                self.champions.push(champion);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Champion> {
        self.index.get(name).and_then(|&slot| self.champions.get(slot))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Champion> {
        let slot = *self.index.get(name)?;
        self.champions.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.iter()
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn incomplete(&self) -> Vec<(String, Rank)> {
        self.champions
            .iter()
            .flat_map(|c| {
                c.incomplete_ranks()
                    .into_iter()
                    .map(move |r| (c.name.clone(), r))
            })
            .collect()
    }
}

impl Serialize for ChampionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.champions.len()))?;
        for champion in &self.champions {
            map.serialize_entry(&champion.name, champion)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub origins: Vec<Tag>,
    pub classes: Vec<Tag>,
    pub champions: ChampionMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(name: &str, cost: i64) -> Champion {
        Champion::new(name.to_string(), vec![], vec![], Some(cost))
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = ChampionMap::new();
        map.insert(champ("Ahri", 4));
        map.insert(champ("Zed", 2));
        map.insert(champ("Ahri", 5));

        let names: Vec<_> = map.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ahri", "Zed"]);
        assert_eq!(map.get("Ahri").unwrap().cost, Some(5));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookup_is_exact() {
        let mut map = ChampionMap::new();
        map.insert(champ("Ahri", 4));
        assert!(map.get("ahri").is_none());
        assert!(map.get("Ahri ").is_none());
        assert!(map.get_mut("Ahri").is_some());
    }

    #[test]
    fn incomplete_lists_missing_and_half_filled_ranks() {
        let mut ahri = champ("Ahri", 4);
        ahri.rank.insert(
            Rank::One,
            RankStats {
                offense: OffenseStats {
                    dps: 1.0,
                    attack_speed: 1.0,
                    damage: 1.0,
                    range: Some(1),
                },
                defense: Some(DefenseStats {
                    health: 1.0,
                    mana: 1.0,
                    armor: 1.0,
                    mr: Some(1),
                }),
            },
        );
        ahri.rank.insert(
            Rank::Two,
            RankStats::from_offense(OffenseStats {
                dps: 1.0,
                attack_speed: 1.0,
                damage: 1.0,
                range: Some(1),
            }),
        );
        let mut map = ChampionMap::new();
        map.insert(ahri);

        assert_eq!(
            map.incomplete(),
            vec![("Ahri".to_string(), Rank::Two), ("Ahri".to_string(), Rank::Three)]
        );
    }

    #[test]
    fn rank_displays_as_number() {
        assert_eq!(Rank::Three.to_string(), "3");
        assert_eq!(Rank::ALL.map(Rank::number), [1, 2, 3]);
    }
}
