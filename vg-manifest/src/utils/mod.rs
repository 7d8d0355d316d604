//! Utility modules for the manifest generator.

pub mod errors;
pub mod logger;

pub use errors::{ManifestError, Result};
