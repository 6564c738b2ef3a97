use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::models::Dataset;
use crate::error::AppError;

/// Where a finished dataset goes. Called once, only after every pass succeeded.
pub trait Persistence {
    fn save(&mut self, dataset: &Dataset) -> Result<(), AppError>;
}

pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFile {
    fn save(&mut self, dataset: &Dataset) -> Result<(), AppError> {
        let json = to_json(dataset)?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::IoError(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

/// Pretty JSON with 4-space indentation. NaN stats come out as `null`.
pub fn to_json(dataset: &Dataset) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    dataset
        .serialize(&mut serializer)
        .map_err(|e| AppError::JsonError(format!("Failed to serialize dataset: {}", e)))?;

    String::from_utf8(buf)
        .map_err(|e| AppError::JsonError(format!("Serialized dataset is not UTF-8: {}", e)))
}
