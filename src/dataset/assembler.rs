use super::models::{ChampionMap, Dataset, Tag};

pub fn assemble(origins: Vec<Tag>, classes: Vec<Tag>, champions: ChampionMap) -> Dataset {
    Dataset {
        origins,
        classes,
        champions,
    }
}
