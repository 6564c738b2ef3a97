use crate::config::Config;
use crate::error::AppError;
use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use super::{View, ViewState};

/// Produces the HTML document behind a view state.
pub trait PageFetcher {
    fn fetch(&mut self, state: &ViewState) -> Result<String, AppError>;
}

pub struct HttpFetcher {
    base_url: String,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let per_second = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            AppError::ConfigError("requests per second must be at least 1".to_string())
        })?;
        Ok(HttpFetcher {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    pub fn url_for(&self, state: &ViewState) -> Result<String, AppError> {
        match (state.view, state.rank) {
            (Some(View::Stats(category)), Some(rank)) => Ok(format!(
                "{}/db/champion-stats?category={}&rank={}",
                self.base_url,
                category.slug(),
                rank
            )),
            (Some(view), _) => Ok(format!("{}/db/{}", self.base_url, view.slug())),
            (None, _) => Err(AppError::navigation("page", "no view is open yet")),
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(25));
        }

        ureq::get(url)
            .set("User-Agent", "tft_dataset/0.1.0")
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&mut self, state: &ViewState) -> Result<String, AppError> {
        let url = self.url_for(state)?;
        self.execute_request(&url)
    }
}

/// Reads pages saved earlier as `<dir>/<page key>.html`.
pub struct SnapshotFetcher {
    dir: PathBuf,
}

impl SnapshotFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SnapshotFetcher { dir: dir.into() }
    }

    pub fn path_for(&self, state: &ViewState) -> Result<PathBuf, AppError> {
        Ok(self.dir.join(format!("{}.html", state.page_key()?)))
    }
}

impl PageFetcher for SnapshotFetcher {
    fn fetch(&mut self, state: &ViewState) -> Result<String, AppError> {
        let path = self.path_for(state)?;
        fs::read_to_string(&path)
            .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))
    }
}
