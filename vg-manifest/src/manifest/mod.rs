//! Manifest types for the snapshot download index.
//!
//! The manifest is serialized as `info.json` in the history directory and
//! tells clients which server lists can be downloaded and from where.

pub mod generator;
pub mod timestamp;

use serde::{Deserialize, Serialize};

/// Manifest document, rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub latest: FileDescriptor,
    pub historical: Vec<FileDescriptor>,
    /// Always `historical.len() + 1`
    pub total_files: usize,
    pub update_frequency: String,
    pub timezone: String,
    pub max_history: u32,
    /// Local time of generation, ISO-8601
    pub generated_at: String,
    pub usage: Usage,
}

/// One downloadable file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub url: String,
    pub description: String,

    /// Raw datetime from the file name (historical entries only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Display form of `datetime`, or the raw text if it didn't parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_datetime: Option<String>,

    /// Only set on the latest file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_latest: Option<bool>,
}

/// Example download commands shipped with the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub latest_download: String,
    pub historical_download: String,
    pub note: String,
}

impl Manifest {
    pub fn historical_count(&self) -> usize {
        self.historical.len()
    }
}
