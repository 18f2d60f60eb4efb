//! Errors for the outer layer (input files, configuration, output)
//!
//! The engine itself never fails; everything here comes from I/O or from
//! parsing user-supplied files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading inputs or settings
#[derive(Error, Debug)]
pub enum OptdiffError {
    #[error("Failed to read listing {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported config version {0:?} (supported: {supported})", supported = crate::config::SUPPORTED_CONFIG_VERSIONS.join(", "))]
    UnsupportedConfigVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
