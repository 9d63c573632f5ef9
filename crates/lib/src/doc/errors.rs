//! Error types for document and editing operations.

use std::path::PathBuf;

use thiserror::Error;

/// Structured error types for document loading and editing.
///
/// Every editing operation fails fast: there is no partial-success state,
/// and none of these conditions are transient. The silent lookups
/// ([`Document::has`](crate::Document::has),
/// [`Document::delete`](crate::Document::delete),
/// [`Document::get`](crate::Document::get)) return sentinels instead of
/// surfacing `PathNotFound`/`PathNotArray`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocError {
    /// Config file does not exist at the resolved path
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An intermediate path segment does not exist
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    /// An intermediate path segment resolves to a non-array value
    #[error("path segment '{segment}' in '{path}' is not an array")]
    PathNotArray { path: String, segment: String },

    /// `add` refused to overwrite an existing key
    #[error("key already exists: {key}")]
    KeyExists { key: String },

    /// `push` target key is missing
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// `push` target key holds a non-array value
    #[error("key is not an array: {key}")]
    KeyNotArray { key: String },

    /// `save` called on a document with no backing file
    #[error("document has no backing file path")]
    NoBackingFile,
}

impl DocError {
    /// Check if this error indicates something was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocError::FileNotFound { .. }
                | DocError::PathNotFound { .. }
                | DocError::KeyNotFound { .. }
        )
    }

    /// Check if this error indicates a conflicting key.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DocError::KeyExists { .. })
    }

    /// Check if this error indicates a value of the wrong shape.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            DocError::PathNotArray { .. } | DocError::KeyNotArray { .. }
        )
    }

    /// Get the dotted path if this is a path-related error.
    pub fn path(&self) -> Option<&str> {
        match self {
            DocError::PathNotFound { path } | DocError::PathNotArray { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the key if this is a key-related error.
    pub fn key(&self) -> Option<&str> {
        match self {
            DocError::KeyExists { key }
            | DocError::KeyNotFound { key }
            | DocError::KeyNotArray { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from DocError to the main Error type
impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
