//! # Error Types
//!
//! This module defines error types used throughout the quotecard library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quotecard operations
#[derive(Debug, Error)]
pub enum QuotecardError {
    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A background image could not be loaded
    #[error("Failed to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Text parameters outside their accepted range
    #[error("Invalid text spec: {0}")]
    InvalidSpec(String),

    /// Invalid color or anchor notation
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QuotecardError>;
