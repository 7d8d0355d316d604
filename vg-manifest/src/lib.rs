//! VPN Gate mirror manifest generator.
//!
//! Scans the snapshot history directory and writes the `info.json` manifest
//! that lists the latest server list plus every historical snapshot.

pub mod config;
pub mod fs;
pub mod manifest;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use manifest::generator::ManifestGenerator;
pub use manifest::{FileDescriptor, Manifest, Usage};
pub use utils::errors::ManifestError;
pub type Result<T> = std::result::Result<T, ManifestError>;
