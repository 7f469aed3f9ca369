//! Errors for loading certification data and parsing inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading noise profile data.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid noise profile for {type_code}: {reason}")]
    InvalidRecord { type_code: String, reason: String },
}

#[derive(Debug, Error)]
#[error("unknown flight direction '{0}' (expected arrival or departure)")]
pub struct ParseDirectionError(pub String);
