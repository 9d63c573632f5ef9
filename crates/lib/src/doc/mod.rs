//! Document-level API.
//!
//! This module provides the main public interface for config documents. The
//! [`Document`] type owns the collection returned by one config file and is
//! the entry point for loading, editing, merging, and saving it.
//!
//! # Usage
//!
//! ```
//! use retcon::Document;
//!
//! # fn main() -> retcon::Result<()> {
//! let mut doc = Document::parse("<?php return [];")?;
//! doc.set("app.name", "Example")?
//!     .set("app.debug", true)?;
//!
//! assert!(doc.has("app.debug"));
//! assert_eq!(doc.get("app.name").and_then(|v| v.as_str()), Some("Example"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path as FsPath, PathBuf};
use std::str::FromStr;

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::syntax;
use crate::{Result, merge};

// Submodules
pub mod array;
pub mod errors;
pub mod value;

mod path;

// Convenience re-exports for the core document types
pub use array::{Array, Entry, Key};
pub use errors::DocError;
pub use value::Value;

/// One config document: the array literal returned by a source file.
///
/// A `Document` owns its tree. Editing operations mutate it in place and
/// chain fluently; merging clones everything it takes from the other
/// document, so no subtree is ever shared between two documents.
///
/// # Examples
///
/// ## Editing
///
/// ```
/// use retcon::Document;
///
/// # fn main() -> retcon::Result<()> {
/// let mut doc = Document::new();
/// doc.set("database.default", "mysql")?;
/// doc.set("database.connections.mysql.port", 3306)?;
///
/// assert!(doc.has("database.connections.mysql.port"));
/// doc.delete("database.default");
/// assert!(!doc.has("database.default"));
/// # Ok(())
/// # }
/// ```
///
/// ## Rendering
///
/// ```
/// use retcon::Document;
///
/// # fn main() -> retcon::Result<()> {
/// let mut doc = Document::new();
/// doc.set("app.debug", true)?;
///
/// assert_eq!(
///     doc.to_source(),
///     "<?php\n\nreturn [\n    \"app\" => [\n        \"debug\" => true,\n    ],\n];\n",
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Array,
    path: Option<PathBuf>,
}

impl Document {
    /// Creates a new empty document with no backing file.
    pub fn new() -> Self {
        Self {
            root: Array::new(),
            path: None,
        }
    }

    /// Parses a document from source text. The document has no backing
    /// file; use [`Document::save_to`] to write it somewhere.
    pub fn parse(source: &str) -> Result<Self> {
        let root = syntax::parse_document(source)?;
        Ok(Self { root, path: None })
    }

    /// Loads a document from a file, appending the conventional `.php`
    /// extension when the path lacks it.
    ///
    /// Fails with [`DocError::FileNotFound`] when the resolved path does not
    /// exist, and with a syntax error when the file is not a single
    /// `return [...];` statement.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = with_php_ext(path.as_ref());
        if !path.exists() {
            return Err(DocError::FileNotFound { path }.into());
        }
        let text = std::fs::read_to_string(&path)?;
        let root = syntax::parse_document(&text)?;
        debug!(path = %path.display(), "loaded config document");
        Ok(Self {
            root,
            path: Some(path),
        })
    }

    /// Serializes the document and overwrites its backing file.
    ///
    /// Fails with [`DocError::NoBackingFile`] when the document was not
    /// loaded from disk. The write is plain and not atomic: racing writers
    /// end up last-write-wins, and a crash mid-write can leave a truncated
    /// file.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_ref().ok_or(DocError::NoBackingFile)?;
        std::fs::write(path, self.to_source())?;
        debug!(path = %path.display(), "saved config document");
        Ok(())
    }

    /// Serializes the document to an explicit path, leaving the backing
    /// file association unchanged.
    pub fn save_to(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_source())?;
        debug!(path = %path.display(), "saved config document");
        Ok(())
    }

    /// Returns the backing file path, when the document was loaded from
    /// disk.
    pub fn file_path(&self) -> Option<&FsPath> {
        self.path.as_deref()
    }

    /// Renders the document back to source text.
    pub fn to_source(&self) -> String {
        syntax::document_source(&self.root)
    }

    /// Exports the document as JSON.
    ///
    /// List-like arrays become JSON arrays, everything else becomes an
    /// object; raw expressions export their source text as strings.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(&self.root).map_err(Into::into)
    }

    /// Returns the root array.
    pub fn root(&self) -> &Array {
        &self.root
    }

    /// Returns a mutable reference to the root array.
    pub fn root_mut(&mut self) -> &mut Array {
        &mut self.root
    }
}

// Editing operations
impl Document {
    /// Gets the value at a dotted key, if present.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        let (container, leaf) = path::resolve_silent_ref(&self.root, key.as_ref())?;
        container.get(leaf)
    }

    /// Returns true if the dotted key resolves to an existing entry. Never
    /// fails: an unresolvable path is simply absent.
    pub fn has(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// Sets the value at a dotted key, creating intermediate arrays as
    /// needed. Replaces the value of an existing entry in place, or appends
    /// a new entry at the end of its container.
    ///
    /// Fails with [`DocError::PathNotArray`] when an intermediate segment
    /// holds a non-array value.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Result<&mut Self> {
        self.set_value(key.as_ref(), value.into())
    }

    /// Like [`Document::set`], but refuses to overwrite: fails with
    /// [`DocError::KeyExists`] when the leaf entry is already present.
    pub fn add(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Result<&mut Self> {
        self.add_value(key.as_ref(), value.into())
    }

    /// Sets the value produced by parsing `code` as a single expression.
    ///
    /// Literal code sets the corresponding typed value; anything else is
    /// stored as a raw expression and rendered verbatim. Fails with
    /// [`SyntaxError::InvalidExpression`](crate::syntax::SyntaxError) when
    /// `code` is not exactly one well-formed expression, in which case the
    /// document is untouched.
    pub fn set_raw(&mut self, key: impl AsRef<str>, code: &str) -> Result<&mut Self> {
        let value = syntax::parse_expression(code)?;
        self.set_value(key.as_ref(), value)
    }

    /// Like [`Document::set_raw`], but refuses to overwrite an existing
    /// entry.
    pub fn add_raw(&mut self, key: impl AsRef<str>, code: &str) -> Result<&mut Self> {
        let value = syntax::parse_expression(code)?;
        self.add_value(key.as_ref(), value)
    }

    /// Appends a value as a new positional entry of the array at a dotted
    /// key.
    ///
    /// Fails with [`DocError::KeyNotFound`] when the leaf entry is absent
    /// and [`DocError::KeyNotArray`] when it holds anything but an array.
    pub fn push(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Result<&mut Self> {
        self.push_value(key.as_ref(), value.into())
    }

    /// Like [`Document::push`], with the value produced by the expression
    /// sub-parser.
    pub fn push_raw(&mut self, key: impl AsRef<str>, code: &str) -> Result<&mut Self> {
        let value = syntax::parse_expression(code)?;
        self.push_value(key.as_ref(), value)
    }

    /// Deletes the entry at a dotted key. A no-op returning `false` when
    /// the path does not resolve; otherwise removes every entry with the
    /// matching key from its container, preserving the order of the
    /// remainder.
    pub fn delete(&mut self, key: impl AsRef<str>) -> bool {
        match path::resolve_silent(&mut self.root, key.as_ref()) {
            Some((container, leaf)) => container.remove(leaf).is_some(),
            None => false,
        }
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<&mut Self> {
        let (container, leaf) = path::resolve_create(&mut self.root, key)?;
        container.set(leaf, value);
        Ok(self)
    }

    fn add_value(&mut self, key: &str, value: Value) -> Result<&mut Self> {
        let (container, leaf) = path::resolve_create(&mut self.root, key)?;
        if container.contains_key(leaf) {
            return Err(DocError::KeyExists {
                key: key.to_string(),
            }
            .into());
        }
        container.push(Entry::keyed(leaf, value));
        Ok(self)
    }

    fn push_value(&mut self, key: &str, value: Value) -> Result<&mut Self> {
        let (container, leaf) = path::resolve_strict(&mut self.root, key)?;
        match container.get_mut(leaf) {
            Some(Value::Array(target)) => {
                target.push(Entry::positional(value));
                Ok(self)
            }
            Some(_) => Err(DocError::KeyNotArray {
                key: key.to_string(),
            }
            .into()),
            None => Err(DocError::KeyNotFound {
                key: key.to_string(),
            }
            .into()),
        }
    }
}

// Merging
impl Document {
    /// Merges another document into this one in place.
    ///
    /// `other` is left untouched; everything taken from it is deep-cloned.
    /// Existing keys keep their relative order, new keys append in `other`'s
    /// order, colliding containers merge recursively, and colliding scalars
    /// are overridden by `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use retcon::Document;
    ///
    /// # fn main() -> retcon::Result<()> {
    /// let mut base = Document::parse(
    ///     "<?php return ['a' => 1, 'b' => ['x' => 1]];",
    /// )?;
    /// let overlay = Document::parse(
    ///     "<?php return ['b' => ['y' => 2], 'c' => 3];",
    /// )?;
    /// base.merge(&overlay);
    ///
    /// assert_eq!(base.get("a").and_then(|v| v.as_int()), Some(1));
    /// assert_eq!(base.get("b.x").and_then(|v| v.as_int()), Some(1));
    /// assert_eq!(base.get("b.y").and_then(|v| v.as_int()), Some(2));
    /// assert_eq!(base.get("c").and_then(|v| v.as_int()), Some(3));
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, other: &Document) -> &mut Self {
        merge::merge_documents(&mut self.root, &other.root);
        self
    }

    /// Loads another config file (same extension handling as
    /// [`Document::load`]) and merges it into this document.
    pub fn merge_file(&mut self, path: impl AsRef<FsPath>) -> Result<&mut Self> {
        let other = Document::load(path)?;
        debug!(path = ?other.file_path(), "merging config document");
        Ok(self.merge(&other))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl FromStr for Document {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

/// Appends the conventional `.php` extension unless the path already ends
/// with it.
fn with_php_ext(path: &FsPath) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.to_str() == Some("php") => path.to_path_buf(),
        _ => {
            let mut s = path.as_os_str().to_os_string();
            s.push(".php");
            PathBuf::from(s)
        }
    }
}
