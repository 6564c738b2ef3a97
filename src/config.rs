use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://tftactics.gg";
pub const DEFAULT_OUTPUT: &str = "data.json";
const DEFAULT_REQUESTS_PER_SECOND: u32 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output: PathBuf,
    pub snapshot_dir: Option<PathBuf>,
    pub requests_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            snapshot_dir: None,
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(url) = env::var("TFT_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(out) = env::var("TFT_OUTPUT") {
            config.output = PathBuf::from(out);
        }
        if let Ok(dir) = env::var("TFT_SNAPSHOT_DIR") {
            config.snapshot_dir = Some(PathBuf::from(dir));
        }
        if let Ok(rps) = env::var("TFT_REQUESTS_PER_SECOND") {
            config.requests_per_second = parse_rate(&rps)?;
        }

        Ok(config)
    }
}

fn parse_rate(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(AppError::ConfigError(format!(
            "TFT_REQUESTS_PER_SECOND must be a positive integer, got '{}'",
            raw
        ))),
        Ok(n) => Ok(n),
    }
}
