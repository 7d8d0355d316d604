//! Manifest generation - scans the history directory and builds the
//! download index.

use chrono::{Local, NaiveDateTime, Timelike};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::timestamp::{format_snapshot_datetime, parse_snapshot_datetime};
use super::{FileDescriptor, Manifest, Usage};
use crate::config::Config;
use crate::fs::{scan_history, SnapshotFile, SnapshotPattern};
use crate::Result;

/// `generated_at` layout, ISO-8601 without offset
const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Placeholder shown in the example historical download command
const DATETIME_PLACEHOLDER: &str = "YYYYMMDD-HHMM";

pub struct ManifestGenerator {
    config: Config,
}

impl ManifestGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the manifest from the current contents of the history directory.
    pub fn generate(&self) -> Result<Manifest> {
        self.generate_at(Local::now().naive_local())
    }

    /// Same as [`generate`](Self::generate) with an explicit generation time.
    pub fn generate_at(&self, generated_at: NaiveDateTime) -> Result<Manifest> {
        let history = &self.config.history;
        let pattern = SnapshotPattern::new(&history.file_prefix, &history.file_suffix);

        info!("Scanning {} for snapshots", history.dir.display());
        let snapshots = scan_history(&history.dir, &pattern)?;

        let historical: Vec<FileDescriptor> = snapshots
            .iter()
            .map(|snapshot| self.historical_descriptor(snapshot))
            .collect();

        Ok(Manifest {
            latest: self.latest_descriptor(),
            total_files: historical.len() + 1,
            historical,
            update_frequency: self.config.metadata.update_frequency.clone(),
            timezone: self.config.metadata.timezone.clone(),
            max_history: self.config.metadata.max_history,
            generated_at: format_generated_at(generated_at),
            usage: self.usage(),
        })
    }

    /// Serialize `manifest` to the configured output path, replacing any
    /// previous manifest. Returns the path written.
    pub fn write(&self, manifest: &Manifest) -> Result<PathBuf> {
        let path = self.config.output_path();
        write_manifest(manifest, &path)?;
        Ok(path)
    }

    fn latest_descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            filename: self.config.site.latest_filename.clone(),
            url: self.config.latest_url(),
            description: self.config.site.latest_description.clone(),
            datetime: None,
            formatted_datetime: None,
            is_latest: Some(true),
        }
    }

    fn historical_descriptor(&self, snapshot: &SnapshotFile) -> FileDescriptor {
        if parse_snapshot_datetime(&snapshot.datetime).is_none() {
            warn!(
                "Could not parse datetime '{}' in {}, using it verbatim",
                snapshot.datetime, snapshot.filename
            );
        }
        let formatted = format_snapshot_datetime(&snapshot.datetime);

        FileDescriptor {
            filename: snapshot.filename.clone(),
            url: self.config.historical_url(&snapshot.filename),
            description: format!("VPN Gate servers data from {}", formatted),
            datetime: Some(snapshot.datetime.clone()),
            formatted_datetime: Some(formatted),
            is_latest: None,
        }
    }

    fn usage(&self) -> Usage {
        let history = &self.config.history;
        let example = format!(
            "{}{}{}",
            history.file_prefix, DATETIME_PLACEHOLDER, history.file_suffix
        );

        Usage {
            latest_download: format!("curl -O {}", self.config.latest_url()),
            historical_download: format!("curl -O {}", self.config.historical_url(&example)),
            note: format!(
                "Replace {} with actual datetime from available files",
                DATETIME_PLACEHOLDER
            ),
        }
    }
}

/// Render the generation time; the fraction is microseconds and is left
/// out entirely when it is zero.
fn format_generated_at(generated_at: NaiveDateTime) -> String {
    let micros = generated_at.nanosecond() % 1_000_000_000 / 1_000;
    let mut rendered = generated_at.format(GENERATED_AT_FORMAT).to_string();
    if micros != 0 {
        rendered.push_str(&format!(".{:06}", micros));
    }
    rendered
}

/// Write `manifest` as 2-space indented JSON. The parent directory must
/// already exist.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, &json)?;

    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
