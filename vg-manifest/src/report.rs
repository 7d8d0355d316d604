//! Human-readable summary printed after a successful run.

use std::fmt::Write;

use crate::Manifest;

/// How many of the newest snapshots the summary lists by name
pub const RECENT_LIMIT: usize = 5;

/// Render the run summary for `manifest`.
pub fn summary(manifest: &Manifest) -> String {
    let mut out = String::new();
    let historical = manifest.historical_count();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Generated file list with {} files", manifest.total_files);
    let _ = writeln!(out, "Latest: {}", manifest.latest.filename);
    let _ = writeln!(out, "Historical: {} files", historical);

    let _ = writeln!(out, "\nRecent files:");
    for (i, file) in manifest.historical.iter().take(RECENT_LIMIT).enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} - {}",
            i + 1,
            file.filename,
            file.formatted_datetime.as_deref().unwrap_or_default()
        );
    }

    if historical > RECENT_LIMIT {
        let _ = writeln!(out, "  ... and {} more files", historical - RECENT_LIMIT);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileDescriptor, Usage};

    fn manifest_with(count: usize) -> Manifest {
        let historical = (0..count)
            .map(|i| FileDescriptor {
                filename: format!("servers-202401{:02}-0000.csv", 28 - i),
                url: String::new(),
                description: String::new(),
                datetime: Some(format!("202401{:02}-0000", 28 - i)),
                formatted_datetime: Some(format!("2024-01-{:02} 00:00 JST", 28 - i)),
                is_latest: None,
            })
            .collect::<Vec<_>>();

        Manifest {
            latest: FileDescriptor {
                filename: "servers.csv".to_string(),
                url: String::new(),
                description: String::new(),
                datetime: None,
                formatted_datetime: None,
                is_latest: Some(true),
            },
            total_files: historical.len() + 1,
            historical,
            update_frequency: "Every 2 hours".to_string(),
            timezone: "JST (UTC+9)".to_string(),
            max_history: 10,
            generated_at: "2024-01-28T00:00:00.000000".to_string(),
            usage: Usage {
                latest_download: String::new(),
                historical_download: String::new(),
                note: String::new(),
            },
        }
    }

    #[test]
    fn test_summary_empty() {
        let text = summary(&manifest_with(0));
        assert_eq!(
            text,
            "Generated file list with 1 files\nLatest: servers.csv\nHistorical: 0 files\n\nRecent files:\n"
        );
    }

    #[test]
    fn test_summary_lists_all_when_few() {
        let text = summary(&manifest_with(2));
        assert!(text.contains("  1. servers-20240128-0000.csv - 2024-01-28 00:00 JST\n"));
        assert!(text.contains("  2. servers-20240127-0000.csv - 2024-01-27 00:00 JST\n"));
        assert!(!text.contains("more files"));
    }

    #[test]
    fn test_summary_truncates_after_five() {
        let text = summary(&manifest_with(8));
        assert!(text.starts_with("Generated file list with 9 files\n"));
        assert!(text.contains("  5. servers-20240124-0000.csv"));
        assert!(!text.contains("  6. "));
        assert!(text.ends_with("  ... and 3 more files\n"));
    }
}
