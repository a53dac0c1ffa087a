//! Error types for modgroup
//!
//! Grouping itself is total: every name splits, a module either has or lacks
//! an explicit group path, and absence of data is an empty path, not a
//! failure. The errors here belong to the ambient layer that loads snapshot
//! descriptions and flags from files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for grouping operations
pub type Result<T> = std::result::Result<T, GrouperError>;

/// Errors that can occur while loading module-set descriptions
#[derive(Error, Debug)]
pub enum GrouperError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot description file not found
    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot description is structurally invalid
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<GrouperError>,
    },
}

impl GrouperError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        GrouperError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid snapshot error
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        GrouperError::InvalidSnapshot {
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
