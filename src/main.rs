use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;

use tft_dataset::config::Config;
use tft_dataset::display::output::{
    display_dataset_summary, display_error, display_info, display_success,
};
use tft_dataset::error::AppError;
use tft_dataset::persist::JsonFile;
use tft_dataset::pipeline::{self, TABLE_READS};
use tft_dataset::source::fetch::{HttpFetcher, SnapshotFetcher};
use tft_dataset::source::html::HtmlSource;
use tft_dataset::source::memory::MemorySource;
use tft_dataset::source::TableSource;

#[derive(Parser, Debug)]
#[command(name = "tft_dataset")]
#[command(about = "Scrape champions, traits and per-rank stats into one JSON dataset", long_about = None)]
struct Args {
    /// Output file (default: data.json)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Site to scrape (default: https://tftactics.gg)
    #[arg(long)]
    base_url: Option<String>,

    /// Read saved pages from this directory instead of the network
    /// Files are named by page key, e.g. champion-stats-offense-1.html
    #[arg(long, conflicts_with = "fixture")]
    snapshots: Option<PathBuf>,

    /// Read every table from a JSON fixture keyed by page key
    #[arg(long)]
    fixture: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(out) = args.out {
        config.output = out;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(dir) = args.snapshots {
        config.snapshot_dir = Some(dir);
    }

    if let Some(fixture) = args.fixture {
        display_info(&format!("Reading tables from fixture {}", fixture.display()));
        return scrape(MemorySource::from_fixture(&fixture)?, &config);
    }

    match config.snapshot_dir.clone() {
        Some(dir) => {
            display_info(&format!("Reading saved pages from {}", dir.display()));
            scrape(HtmlSource::new(SnapshotFetcher::new(dir)), &config)
        }
        None => {
            display_info(&format!("Scraping {}", config.base_url));
            scrape(HtmlSource::new(HttpFetcher::new(&config)?), &config)
        }
    }
}

fn scrape<S: TableSource>(source: S, config: &Config) -> Result<(), AppError> {
    let mut sink = JsonFile::new(&config.output);

    let pb = ProgressBar::new(TABLE_READS);
    pb.set_message("Reading tables");
    let dataset = match pipeline::run(source, &mut sink, &pb) {
        Ok(dataset) => dataset,
        Err(e) => {
            pb.abandon();
            return Err(e);
        }
    };
    pb.finish_with_message("✓ All tables read");

    display_success(&format!("Wrote {}", sink.path().display()));
    display_dataset_summary(&dataset, sink.path());

    Ok(())
}
