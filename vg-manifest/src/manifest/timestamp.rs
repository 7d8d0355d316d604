//! Snapshot timestamps embedded in file names.

use chrono::NaiveDateTime;

/// Layout of the datetime part of a snapshot name, e.g. `20240615-1200`
pub const SNAPSHOT_FORMAT: &str = "%Y%m%d-%H%M";

/// Layout used in descriptions, e.g. `2024-06-15 12:00 JST`
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M JST";

/// Parse the raw datetime part of a snapshot name.
///
/// Only the exact `YYYYMMDD-HHMM` shape is accepted; chrono on its own
/// tolerates whitespace between numeric fields.
pub fn parse_snapshot_datetime(raw: &str) -> Option<NaiveDateTime> {
    if !has_snapshot_shape(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, SNAPSHOT_FORMAT).ok()
}

/// Eight digits, a dash, four digits
fn has_snapshot_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 13
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Render a raw snapshot datetime for display.
///
/// Unparseable input is returned unchanged.
pub fn format_snapshot_datetime(raw: &str) -> String {
    match parse_snapshot_datetime(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
