//! Dotted-path resolution for nested document access.
//!
//! A dotted key like `"app.providers"` names an entry inside nested arrays:
//! every segment but the last walks into a string-keyed child array, the
//! last segment is the leaf key the caller operates on. Resolution comes in
//! three modes matching the editing operations: create missing
//! intermediates, fail on them, or give up silently.

use super::array::{Array, Entry};
use super::errors::DocError;
use super::value::Value;

enum Mode {
    Create,
    Strict,
    Silent,
}

/// Splits a dotted key into its intermediate segments and the leaf key.
///
/// Splitting is verbatim: empty segments address entries with an empty
/// string key, exactly as the key text says.
fn split_leaf(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path.split('.').collect();
    // split() yields at least one element for any input
    let leaf = segments.pop().unwrap_or(path);
    (segments, leaf)
}

fn walk<'a, 'k>(
    root: &'a mut Array,
    path: &'k str,
    mode: Mode,
) -> Result<Option<(&'a mut Array, &'k str)>, DocError> {
    let (intermediate, leaf) = split_leaf(path);
    let mut current = root;

    for segment in intermediate {
        let idx = match current.find_index(segment) {
            Some(idx) => idx,
            None => match mode {
                Mode::Create => {
                    current.push(Entry::keyed(segment, Array::new()));
                    current.len() - 1
                }
                Mode::Strict => {
                    return Err(DocError::PathNotFound {
                        path: path.to_string(),
                    });
                }
                Mode::Silent => return Ok(None),
            },
        };

        current = match current.entries_mut().get_mut(idx).map(Entry::value_mut) {
            Some(Value::Array(array)) => array,
            Some(_) => match mode {
                Mode::Silent => return Ok(None),
                _ => {
                    return Err(DocError::PathNotArray {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    });
                }
            },
            // find_index returned a valid index; keep the walk total anyway
            None => return Ok(None),
        };
    }

    Ok(Some((current, leaf)))
}

/// Resolves a dotted key, creating missing intermediate arrays.
///
/// Fails with [`DocError::PathNotArray`] when an intermediate segment holds
/// a non-array value.
pub(crate) fn resolve_create<'a, 'k>(
    root: &'a mut Array,
    path: &'k str,
) -> Result<(&'a mut Array, &'k str), DocError> {
    match walk(root, path, Mode::Create)? {
        Some(hit) => Ok(hit),
        // Create mode fills in every missing segment, so this arm is inert
        None => Err(DocError::PathNotFound {
            path: path.to_string(),
        }),
    }
}

/// Resolves a dotted key, failing on missing or non-array intermediates.
pub(crate) fn resolve_strict<'a, 'k>(
    root: &'a mut Array,
    path: &'k str,
) -> Result<(&'a mut Array, &'k str), DocError> {
    match walk(root, path, Mode::Strict)? {
        Some(hit) => Ok(hit),
        None => Err(DocError::PathNotFound {
            path: path.to_string(),
        }),
    }
}

/// Resolves a dotted key, returning `None` instead of an error when an
/// intermediate segment is missing or holds a non-array value.
pub(crate) fn resolve_silent<'a, 'k>(
    root: &'a mut Array,
    path: &'k str,
) -> Option<(&'a mut Array, &'k str)> {
    walk(root, path, Mode::Silent).ok().flatten()
}

/// Immutable counterpart of [`resolve_silent`], used by the read-only
/// lookups.
pub(crate) fn resolve_silent_ref<'a, 'k>(
    root: &'a Array,
    path: &'k str,
) -> Option<(&'a Array, &'k str)> {
    let (intermediate, leaf) = split_leaf(path);
    let mut current = root;

    for segment in intermediate {
        match current.get(segment) {
            Some(Value::Array(array)) => current = array,
            _ => return None,
        }
    }

    Some((current, leaf))
}
