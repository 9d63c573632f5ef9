//!
//! Retcon: a surgical editor for PHP `return`-style configuration files.
//!
//! A retcon [`Document`] is the array literal returned by a config file
//! (`<?php return [...];`), held as an owned in-memory tree. The library
//! edits that tree by dotted path and writes it back out deterministically,
//! without attempting to preserve anything the model does not represent.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Document`)**: The returned collection of one config file. Owns the
//!   tree and remembers the file it was loaded from.
//! * **Values (`doc::Value`)**: Scalars, nested arrays, and opaque raw expressions. Raw
//!   expressions carry verbatim source text for anything the model cannot decompose
//!   (function calls, constants, interpolated strings).
//! * **Arrays (`doc::Array`)**: The single container type. Whether an array behaves as a
//!   list or as a map is decided structurally from its entries, never stored.
//! * **Dotted paths**: Every editing operation addresses entries as `"app.providers"`,
//!   creating intermediate arrays where the operation calls for it.
//! * **Merging (`Document::merge`)**: Recursive deep-merge of one document into another.
//!   Lists concatenate with structural dedup, maps merge key by key, scalars override.
//! * **Syntax (`syntax`)**: The loader, printer, and expression sub-parser for the
//!   config dialect. The printer is deterministic and idempotent across reloads.
//!
//! ## Usage
//!
//! ```no_run
//! use retcon::Document;
//!
//! # fn main() -> retcon::Result<()> {
//! let mut doc = Document::load("config/app")?;
//! doc.set("app.name", "Example")?
//!     .set("cache.ttl", 300)?;
//! doc.push("app.providers", "App\\Providers\\EventServiceProvider")?;
//! doc.set_raw("app.key", "env(\"APP_KEY\")")?;
//! doc.delete("app.legacy");
//! doc.save()?;
//! # Ok(())
//! # }
//! ```

pub mod doc;
pub mod merge;
pub mod syntax;

/// Re-export the main entry points for easier access.
pub use doc::{Array, Document, Value};

/// Result type used throughout the retcon library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the retcon library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured document and editing errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured source-text errors from the syntax module
    #[error(transparent)]
    Syntax(syntax::SyntaxError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Doc(_) => "doc",
            Error::Syntax(_) => "syntax",
        }
    }

    /// Check if this error indicates something was not found (a file, a path,
    /// or a key).
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (key already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error indicates a value of the wrong shape (a path or
    /// push target that is not an array).
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from parsing source text or expressions.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
