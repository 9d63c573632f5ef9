//! Printer for config sources.
//!
//! Rendering is deterministic, and idempotent across a reload: printing a
//! document, parsing the output, and printing again yields byte-identical
//! text. Strings always render double-quoted with a fixed escape set so
//! that no interpolation can occur on reload; non-empty arrays render one
//! entry per line with a trailing comma after every entry; empty arrays
//! render compactly.

use crate::doc::{Array, Key, Value};

const INDENT: &str = "    ";

/// Renders a whole config source for the given root array.
pub(crate) fn document_source(root: &Array) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("<?php\n\nreturn ");
    write_array(&mut out, root, 0);
    out.push_str(";\n");
    out
}

/// Renders a single value as canonical standalone text.
///
/// This is the rendering used for structural equality during merges: two
/// values are considered the same exactly when their canonical text is
/// identical.
pub(crate) fn value_source(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(x) => write_float(out, *x),
        Value::Text(s) => write_quoted(out, s),
        Value::Array(array) => write_array(out, array, level),
        Value::Raw(raw) => out.push_str(raw.as_str()),
    }
}

fn write_array(out: &mut String, array: &Array, level: usize) {
    if array.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    for entry in array.entries() {
        for _ in 0..=level {
            out.push_str(INDENT);
        }
        if let Some(key) = entry.key() {
            write_key(out, key);
            out.push_str(" => ");
        }
        write_value(out, entry.value(), level + 1);
        out.push_str(",\n");
    }
    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push(']');
}

fn write_key(out: &mut String, key: &Key) {
    match key {
        Key::Str(s) => write_quoted(out, s),
        Key::Int(n) => out.push_str(&n.to_string()),
        Key::Raw(raw) => out.push_str(raw.as_str()),
    }
}

/// Double-quoted rendering with a fixed escape set: the quote, the
/// backslash, the interpolation trigger, and the control whitespace
/// characters. Everything else passes through verbatim.
fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            '\u{000B}' => out.push_str("\\v"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Floats keep a fractional marker so they reload as floats; non-finite
/// values render as the source language's constants and reload as raw
/// expressions, which is stable across further round trips.
fn write_float(out: &mut String, x: f64) {
    if x.is_nan() {
        out.push_str("NAN");
    } else if x.is_infinite() {
        out.push_str(if x > 0.0 { "INF" } else { "-INF" });
    } else {
        let s = x.to_string();
        out.push_str(&s);
        if !s.contains('.') {
            out.push_str(".0");
        }
    }
}
