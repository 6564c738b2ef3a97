use indicatif::ProgressBar;

use crate::dataset::assembler::assemble;
use crate::dataset::catalog::build_catalog;
use crate::dataset::models::{Dataset, Rank};
use crate::dataset::ranked_stats::OffensePass;
use crate::dataset::roster::extract_roster;
use crate::display::output::{display_incomplete, display_info, display_success};
use crate::error::AppError;
use crate::persist::Persistence;
use crate::source::navigator::Navigator;
use crate::source::{NavigationTarget, StatCategory, TableSource, View};

/// Table reads in one full run: origins, classes, roster, then 3 ranks x 2 categories.
pub const TABLE_READS: u64 = 3 + 2 * Rank::ALL.len() as u64;

/// Run every pass in order and persist the result.
///
/// Nothing reaches `sink` unless all passes succeed.
pub fn run<S, P>(source: S, sink: &mut P, pb: &ProgressBar) -> Result<Dataset, AppError>
where
    S: TableSource,
    P: Persistence,
{
    let mut nav = Navigator::new(source);

    nav.goto(NavigationTarget::SelectTab(View::Origins))?;
    display_info("Getting origins");
    let origins = build_catalog(&nav.read_rows()?);
    pb.inc(1);

    nav.goto(NavigationTarget::SelectTab(View::Classes))?;
    display_info("Getting classes");
    let classes = build_catalog(&nav.read_rows()?);
    pb.inc(1);

    nav.goto(NavigationTarget::SelectTab(View::Champions))?;
    display_info("Getting champions");
    let roster = extract_roster(&nav.read_rows()?, &origins, &classes);
    pb.inc(1);
    display_success(&format!(
        "Found {} origins, {} classes, {} champions",
        origins.len(),
        classes.len(),
        roster.len()
    ));

    nav.goto(NavigationTarget::SelectTab(View::Stats(StatCategory::Offense)))?;
    display_info("Getting offense stats");
    let mut offense = OffensePass::new(roster);
    for rank in Rank::ALL {
        nav.goto(NavigationTarget::SelectRank(rank))?;
        display_info(&format!("Rank {}", rank));
        offense.merge(rank, &nav.read_rows()?)?;
        pb.inc(1);
    }

    nav.goto(NavigationTarget::SelectTab(View::Stats(StatCategory::Defense)))?;
    display_info("Getting defense stats");
    let mut defense = offense.finish();
    for rank in Rank::ALL {
        nav.goto(NavigationTarget::SelectRank(rank))?;
        display_info(&format!("Rank {}", rank));
        defense.merge(rank, &nav.read_rows()?)?;
        pb.inc(1);
    }
    let champions = defense.finish();
    display_incomplete(&champions.incomplete());

    let dataset = assemble(origins, classes, champions);
    sink.save(&dataset)?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::models::{DefenseStats, OffenseStats, Row};
    use crate::source::memory::MemorySource;

    #[derive(Default)]
    struct Recorder {
        saved: Vec<Dataset>,
    }

    impl Persistence for Recorder {
        fn save(&mut self, dataset: &Dataset) -> Result<(), AppError> {
            self.saved.push(dataset.clone());
            Ok(())
        }
    }

    fn rows(cells: &[&[&str]]) -> Vec<Row> {
        cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn site() -> MemorySource {
        let mut source = MemorySource::new();
        source.insert("origins", rows(&[&["Wild"], &["Ocean"]]));
        source.insert("classes", rows(&[&["Bruiser"], &["Sniper"]]));
        source.insert(
            "champions",
            rows(&[
                &["Ahri", "Wild Ocean", "Bruiser Sniper", "4"],
                &["Nami", "Ocean", "Sniper", "1"],
            ]),
        );
        for rank in Rank::ALL {
            let n = rank.number().to_string();
            source.insert(
                format!("champion-stats-offense-{}", rank),
                rows(&[
                    &["Ahri", "1.2", "0.8", "50", "4"],
                    &["Nami", n.as_str(), "0.6", "40", "4"],
                ]),
            );
            source.insert(
                format!("champion-stats-defense-{}", rank),
                rows(&[
                    &["Nami", "500", "60", "15", "15"],
                    &["Ahri", "600", "100", "20", "30"],
                ]),
            );
        }
        source
    }

    #[test]
    fn full_run_completes_every_rank() {
        let mut source = site();
        let mut sink = Recorder::default();

        let dataset = run(&mut source, &mut sink, &ProgressBar::hidden()).unwrap();

        assert_eq!(dataset.origins, vec!["Wild", "Ocean"]);
        assert_eq!(dataset.classes, vec!["Bruiser", "Sniper"]);
        assert!(dataset.champions.incomplete().is_empty());
        for champion in dataset.champions.iter() {
            assert_eq!(champion.rank.len(), 3);
        }

        let ahri = dataset.champions.get("Ahri").unwrap();
        assert_eq!(ahri.origin, vec!["Wild", "Ocean"]);
        assert_eq!(ahri.class, vec!["Bruiser", "Sniper"]);
        let rank_one = &ahri.rank[&Rank::One];
        assert_eq!(
            rank_one.offense,
            OffenseStats {
                dps: 1.2,
                attack_speed: 0.8,
                damage: 50.0,
                range: Some(4),
            }
        );
        assert_eq!(
            rank_one.defense,
            Some(DefenseStats {
                health: 600.0,
                mana: 100.0,
                armor: 20.0,
                mr: Some(30),
            })
        );

        let nami = dataset.champions.get("Nami").unwrap();
        assert_eq!(nami.rank[&Rank::Three].offense.dps, 3.0);

        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0], dataset);
    }

    #[test]
    fn navigation_visits_offense_before_defense() {
        let mut source = site();
        run(&mut source, &mut Recorder::default(), &ProgressBar::hidden()).unwrap();

        let offense = NavigationTarget::SelectTab(View::Stats(StatCategory::Offense));
        let defense = NavigationTarget::SelectTab(View::Stats(StatCategory::Defense));
        let history = source.history();

        assert_eq!(history.len(), 11);
        assert_eq!(history[3], offense);
        assert_eq!(history[4], NavigationTarget::SelectRank(Rank::One));
        assert_eq!(history[6], NavigationTarget::SelectRank(Rank::Three));
        assert_eq!(history[7], defense);
    }

    #[test]
    fn unknown_defense_champion_aborts_without_saving() {
        let mut source = site();
        source.insert(
            "champion-stats-defense-2",
            rows(&[&["Teemo", "500", "60", "15", "15"]]),
        );
        let mut sink = Recorder::default();

        let err = run(&mut source, &mut sink, &ProgressBar::hidden()).unwrap_err();

        assert!(matches!(
            err,
            AppError::LookupFailure { ref name, category: StatCategory::Defense, rank: Rank::Two }
                if name == "Teemo"
        ));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn missing_view_aborts_without_saving() {
        let mut source = MemorySource::new();
        source.insert("origins", rows(&[&["Wild"]]));
        let mut sink = Recorder::default();

        let err = run(&mut source, &mut sink, &ProgressBar::hidden()).unwrap_err();

        assert!(matches!(err, AppError::NavigationFailure { .. }));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn demo_fixture_runs_clean() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/fixture.json");
        let source = MemorySource::from_fixture(&path).unwrap();

        let dataset = run(source, &mut Recorder::default(), &ProgressBar::hidden()).unwrap();

        assert_eq!(dataset.champions.len(), 2);
        assert!(dataset.champions.incomplete().is_empty());
        assert_eq!(dataset.champions.get("Kassadin").unwrap().origin, vec!["Void"]);
    }

    #[test]
    fn json_file_is_absent_after_failed_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut source = site();
        source.insert("champion-stats-offense-1", rows(&[&["Teemo", "1", "1", "1", "1"]]));

        let mut sink = crate::persist::JsonFile::new(&path);
        assert!(run(&mut source, &mut sink, &ProgressBar::hidden()).is_err());
        assert!(!path.exists());
    }
}
