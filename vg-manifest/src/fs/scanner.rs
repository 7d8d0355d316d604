//! History directory scanning.
//!
//! Lists the dated snapshot files that sit directly inside the history
//! directory. Only file names are inspected, never contents.

use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{ManifestError, Result};

/// Glob-style `<prefix>*<suffix>` filename pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPattern {
    pub prefix: String,
    pub suffix: String,
}

impl SnapshotPattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns the part matched by `*`, or None if the name doesn't match.
    ///
    /// Prefix and suffix may not overlap, so `servers-` alone never matches
    /// `servers-*-`.
    pub fn capture<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if file_name.len() < self.prefix.len() + self.suffix.len() {
            return None;
        }
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }
}

/// A snapshot discovered in the history directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    /// Bare file name, e.g. `servers-20240615-1200.csv`
    pub filename: String,

    /// Text between prefix and suffix, e.g. `20240615-1200`
    pub datetime: String,
}

/// Scan `dir` for snapshots matching `pattern`.
///
/// A missing directory yields an empty list. Results are ordered by
/// descending file name, which is newest first for `YYYYMMDD-HHMM` names.
pub fn scan_history(dir: &Path, pattern: &SnapshotPattern) -> Result<Vec<SnapshotFile>> {
    if !dir.exists() {
        debug!("History directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        warn!("History path {} is not a directory, ignoring it", dir.display());
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|source| ManifestError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;

        let Some(file_name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 entry {}", entry.path().display());
            continue;
        };

        if let Some(datetime) = pattern.capture(file_name) {
            snapshots.push(SnapshotFile {
                filename: file_name.to_string(),
                datetime: datetime.to_string(),
            });
        }
    }

    snapshots.sort_by(|a, b| b.filename.cmp(&a.filename));

    debug!("Found {} snapshots in {}", snapshots.len(), dir.display());

    Ok(snapshots)
}
