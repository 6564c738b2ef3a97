use crate::dataset::models::{Dataset, Rank};
use colored::*;
use std::path::Path;
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    cost: String,
    origin: String,
    class: String,
    ranks: String,
}

pub fn display_dataset_summary(dataset: &Dataset, path: &Path) {
    println!(
        "\n{}",
        format!("📦 Dataset written to {}", path.display())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {} origins, {} classes, {} champions\n",
        "📈 Totals:".bold(),
        dataset.origins.len().to_string().green(),
        dataset.classes.len().to_string().green(),
        dataset.champions.len().to_string().green()
    );

    if dataset.champions.is_empty() {
        println!("{}", "No champions were found in the roster".yellow());
        return;
    }

    let mut rows = vec![];
    for (idx, champion) in dataset.champions.iter().enumerate() {
        let complete = Rank::ALL.len() - champion.incomplete_ranks().len();
        let ranks = format!("{}/{}", complete, Rank::ALL.len());

        rows.push(ChampionRow {
            number: format!("{}", idx + 1),
            champion: champion.name.clone(),
            cost: champion
                .cost
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string()),
            origin: champion.origin.join(", "),
            class: champion.class.join(", "),
            ranks: if complete == Rank::ALL.len() {
                ranks.green().to_string()
            } else {
                ranks.red().to_string()
            },
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_incomplete(gaps: &[(String, Rank)]) {
    if gaps.is_empty() {
        return;
    }
    display_warning(&format!(
        "{} champion/rank pairs are missing stats:",
        gaps.len()
    ));
    for (name, rank) in gaps {
        println!("   {} rank {}", name, rank);
    }
}

pub fn display_read_timing(rows: usize, elapsed: Duration) {
    println!(
        "   {} rows in {}",
        rows,
        format!("{:.3}ms", elapsed.as_secs_f64() * 1000.0).dimmed()
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}
