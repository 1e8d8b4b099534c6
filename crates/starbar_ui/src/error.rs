//! # StarBar Error Types
//!
//! Interactive paths never fail; they clamp. Only configuration entry points
//! return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring a star bar.
#[derive(Error, Debug)]
pub enum StarBarError {
    /// Range boundaries violate `1 <= yellow <= green <= 10`.
    #[error("invalid ranges: yellow starts at {yellow}, green starts at {green}")]
    InvalidRanges {
        /// Requested start of the yellow range.
        yellow: u8,
        /// Requested start of the green range.
        green: u8,
    },

    /// Configuration parsed but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for [`crate::StarBarConfig`].
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for star bar configuration.
pub type StarBarResult<T> = Result<T, StarBarError>;
