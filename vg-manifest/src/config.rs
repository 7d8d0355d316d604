//! Configuration for manifest generation.
//!
//! Loads configuration from a TOML file. Every field falls back to the
//! mirror's built-in values, so a partial file (or no file) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root URL every download link is built from (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Well-known name of the current snapshot
    #[serde(default = "default_latest_filename")]
    pub latest_filename: String,

    #[serde(default = "default_latest_description")]
    pub latest_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Local directory holding the dated snapshots
    #[serde(default = "default_history_dir")]
    pub dir: PathBuf,

    /// Path of the history directory relative to `site.base_url`
    #[serde(default = "default_history_url_path")]
    pub url_path: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Manifest file name, written inside `dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_update_frequency")]
    pub update_frequency: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Advertised retention; the generator never truncates to it.
    #[serde(default = "default_max_history")]
    pub max_history: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_base_url() -> String {
    "https://raw.githubusercontent.com/funcra/vg-mirror/main".to_string()
}

fn default_latest_filename() -> String {
    "servers.csv".to_string()
}

fn default_latest_description() -> String {
    "Most recent VPN Gate servers data".to_string()
}

fn default_history_dir() -> PathBuf {
    PathBuf::from("servers_history")
}

fn default_history_url_path() -> String {
    "servers_history".to_string()
}

fn default_file_prefix() -> String {
    "servers-".to_string()
}

fn default_file_suffix() -> String {
    ".csv".to_string()
}

fn default_output_file() -> String {
    "info.json".to_string()
}

fn default_update_frequency() -> String {
    "Every 2 hours".to_string()
}

fn default_timezone() -> String {
    "JST (UTC+9)".to_string()
}

fn default_max_history() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            latest_filename: default_latest_filename(),
            latest_description: default_latest_description(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: default_history_dir(),
            url_path: default_history_url_path(),
            file_prefix: default_file_prefix(),
            file_suffix: default_file_suffix(),
            output_file: default_output_file(),
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            update_frequency: default_update_frequency(),
            timezone: default_timezone(),
            max_history: default_max_history(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every filename ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.trim().is_empty() {
            return Err(crate::ManifestError::Config(
                "site.base_url must not be empty".to_string(),
            ));
        }
        if self.history.file_prefix.is_empty() && self.history.file_suffix.is_empty() {
            return Err(crate::ManifestError::Config(
                "history.file_prefix and history.file_suffix cannot both be empty".to_string(),
            ));
        }
        if self.history.output_file.is_empty() {
            return Err(crate::ManifestError::Config(
                "history.output_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the manifest gets written
    pub fn output_path(&self) -> PathBuf {
        self.history.dir.join(&self.history.output_file)
    }

    /// Download URL for a path relative to the site root
    pub fn url_for(&self, relative_path: &str) -> String {
        format!("{}/{}", self.site.base_url.trim_end_matches('/'), relative_path)
    }

    pub fn latest_url(&self) -> String {
        self.url_for(&self.site.latest_filename)
    }

    pub fn historical_url(&self, filename: &str) -> String {
        self.url_for(&format!("{}/{}", self.history.url_path, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history.dir, PathBuf::from("servers_history"));
        assert_eq!(config.output_path(), PathBuf::from("servers_history/info.json"));
        assert_eq!(config.metadata.max_history, 10);
        assert_eq!(
            config.latest_url(),
            "https://raw.githubusercontent.com/funcra/vg-mirror/main/servers.csv"
        );
    }

    #[test]
    fn test_historical_url() {
        let config = Config::default();
        assert_eq!(
            config.historical_url("servers-20240615-1200.csv"),
            "https://raw.githubusercontent.com/funcra/vg-mirror/main/servers_history/servers-20240615-1200.csv"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("vg-manifest.toml");
        std::fs::write(
            &path,
            "[site]\nbase_url = \"https://mirror.example.com/\"\n\n[log]\nlevel = \"debug\"\n",
        )?;

        let config = Config::from_file(&path)?;
        assert_eq!(config.site.latest_filename, "servers.csv");
        assert_eq!(config.history.file_prefix, "servers-");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.latest_url(), "https://mirror.example.com/servers.csv");
        Ok(())
    }

    #[test]
    fn test_invalid_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[site\nbase_url = 1")?;

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(crate::ManifestError::Toml(_))));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let mut config = Config::default();
        config.history.file_prefix.clear();
        config.history.file_suffix.clear();
        assert!(matches!(config.validate(), Err(crate::ManifestError::Config(_))));
    }
}
