//! Error types for FolioDB
//!
//! Provides a unified error type for all driver operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type for FolioDB operations
#[derive(Debug, Error)]
pub enum FolioError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// An empty collection or resource name; raised before any I/O
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    /// Neither `<path>` nor `<path>.json` exists on disk
    #[error("unable to find file or directory named {}", .0.display())]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolioError {
    pub(crate) fn validation(message: &str) -> Self {
        FolioError::Validation(message.to_string())
    }

    /// True for the not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound(_))
    }
}
