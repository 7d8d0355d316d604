//! File system operations for manifest generation.

pub mod scanner;

pub use scanner::{scan_history, SnapshotFile, SnapshotPattern};
