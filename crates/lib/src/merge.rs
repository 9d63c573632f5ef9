//! Recursive deep-merge of config documents.
//!
//! Merging folds a source tree into a target tree in place. At every level
//! the engine decides, per colliding pair, how the two values combine:
//!
//! - two arrays that are both list-like concatenate with structural dedup;
//! - any other pair of arrays merges key by key, recursing on nested
//!   collisions;
//! - everything else is override-wins: the source value replaces the target
//!   value, keeping the target entry's position.
//!
//! Every value taken from the source is deep-cloned, so no subtree is ever
//! shared between the two documents afterwards.

use crate::doc::{Array, Entry, Key, Value};
use crate::syntax;

/// Merges `source` into `target` at the document root.
///
/// Root entries are addressed by string key: target keys keep their original
/// relative order, keys new to the target are appended in source order, and
/// source entries without a string key are skipped at this level.
pub fn merge_documents(target: &mut Array, source: &Array) {
    for src_entry in source.entries() {
        let Some(key) = src_entry.key().and_then(Key::as_str) else {
            continue;
        };
        match target.find_index(key) {
            None => target.push(Entry::keyed(key, src_entry.value().clone())),
            Some(idx) => merge_slot(target, idx, src_entry.value()),
        }
    }
}

/// Merges two colliding containers.
///
/// Both list-like: source entries whose value has no structural equal
/// anywhere in the current target (original or already appended) are
/// appended as keyless entries, preserving order; the result is stable.
///
/// Otherwise the pair is treated as map-like: string-keyed source entries
/// merge by key, and source entries without a string key are appended
/// positionally, never overwriting anything. Mixed shapes are tolerated,
/// not rejected.
pub fn merge_containers(target: &mut Array, source: &Array) {
    if target.is_list_like() && source.is_list_like() {
        for src_entry in source.entries() {
            let duplicate = target
                .entries()
                .iter()
                .any(|t| values_equal(t.value(), src_entry.value()));
            if !duplicate {
                target.push(Entry::positional(src_entry.value().clone()));
            }
        }
        return;
    }

    for src_entry in source.entries() {
        match src_entry.key().and_then(Key::as_str) {
            None => target.push(Entry::positional(src_entry.value().clone())),
            Some(key) => match target.find_index(key) {
                None => target.push(Entry::keyed(key, src_entry.value().clone())),
                Some(idx) => merge_slot(target, idx, src_entry.value()),
            },
        }
    }
}

/// Combines one colliding pair: container/container recurses, anything else
/// is replaced by a clone of the source value in place.
fn merge_slot(target: &mut Array, idx: usize, source: &Value) {
    let Some(slot) = target.entries_mut().get_mut(idx).map(Entry::value_mut) else {
        return;
    };
    match (slot, source) {
        (Value::Array(target_inner), Value::Array(source_inner)) => {
            merge_containers(target_inner, source_inner);
        }
        (slot, source) => *slot = source.clone(),
    }
}

/// Structural equality: two values are equal exactly when their canonical
/// rendered text is identical.
///
/// This is textual, not semantic: two raw expressions that differ only in
/// formatting are distinct. A deliberate simplification, kept as documented.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    syntax::value_source(a) == syntax::value_source(b)
}
