//! Print/load/print stability and export formats.

use std::str::FromStr;

use retcon::{Document, Value};
use serde_json::json;

use crate::helpers::*;

/// Asserts the round-trip law: printing, reloading, and printing again
/// yields the same text.
fn assert_stable(doc: &Document) {
    let once = doc.to_source();
    let reloaded = Document::parse(&once).expect("printed source should parse");
    assert_eq!(reloaded.to_source(), once);
}

#[test]
fn empty_document_is_stable() {
    assert_stable(&Document::new());
    assert_eq!(Document::new().to_source(), "<?php\n\nreturn [];\n");
}

#[test]
fn documents_built_through_the_api_are_stable() {
    let mut doc = Document::new();
    doc.set("app.name", "Test App").unwrap();
    doc.set("app.debug", true).unwrap();
    doc.set("app.workers", 4).unwrap();
    doc.set("app.ratio", 0.25).unwrap();
    doc.set("app.fallback", Value::Null).unwrap();
    doc.set("providers", vec!["A", "B"]).unwrap();
    doc.set_raw("app.key", "env(\"APP_KEY\")").unwrap();
    doc.push("providers", "C").unwrap();

    assert_stable(&doc);
}

#[test]
fn loaded_documents_are_stable() {
    assert_stable(&sample());
    assert_stable(&doc(
        "<?php return [0 => 'a', 'k' => ['x' => 1.0, 'y' => [true, null, 'z']], 2 => env('E')];",
    ));
}

#[test]
fn awkward_strings_survive_the_round_trip() {
    let mut doc = Document::new();
    let awkward = "quote \" backslash \\ dollar $var newline \n tab \t done";
    doc.set("s", awkward).unwrap();
    doc.set("unicode", "héllo 🦀 Grüße").unwrap();

    let reloaded = Document::parse(&doc.to_source()).unwrap();
    assert_eq!(reloaded.get("s").and_then(Value::as_str), Some(awkward));
    assert_eq!(
        reloaded.get("unicode").and_then(Value::as_str),
        Some("héllo 🦀 Grüße"),
    );
    assert_stable(&doc);
}

#[test]
fn floats_stay_floats_across_reloads() {
    let mut doc = Document::new();
    doc.set("whole", 3.0).unwrap();
    doc.set("frac", 0.1).unwrap();
    doc.set("big", 1e300).unwrap();

    let reloaded = Document::parse(&doc.to_source()).unwrap();
    assert_eq!(reloaded.get("whole").and_then(Value::as_float), Some(3.0));
    assert_eq!(reloaded.get("frac").and_then(Value::as_float), Some(0.1));
    assert_eq!(reloaded.get("big").and_then(Value::as_float), Some(1e300));
    assert_stable(&doc);
}

#[test]
fn non_finite_floats_render_as_constants_and_stay_stable() {
    let mut doc = Document::new();
    doc.set("inf", f64::INFINITY).unwrap();
    doc.set("ninf", f64::NEG_INFINITY).unwrap();
    doc.set("nan", f64::NAN).unwrap();

    let once = doc.to_source();
    assert!(once.contains("\"inf\" => INF,"));
    assert!(once.contains("\"ninf\" => -INF,"));
    assert!(once.contains("\"nan\" => NAN,"));
    assert_stable(&doc);
}

#[test]
fn display_and_from_str_are_the_source_form() {
    let doc = sample();
    assert_eq!(doc.to_string(), doc.to_source());

    let parsed = Document::from_str(&doc.to_string()).unwrap();
    assert_eq!(parsed.to_source(), doc.to_source());
}

#[test]
fn to_json_exports_lists_maps_and_raws() {
    let doc = doc(
        "<?php return [
            'name' => 'App',
            'debug' => true,
            'workers' => 4,
            'ratio' => 0.5,
            'fallback' => null,
            'providers' => ['A', 'B'],
            'key' => env(\"APP_KEY\"),
        ];",
    );

    let exported = doc.to_json().unwrap();
    assert_eq!(exported["name"], json!("App"));
    assert_eq!(exported["debug"], json!(true));
    assert_eq!(exported["workers"], json!(4));
    assert_eq!(exported["ratio"], json!(0.5));
    assert_eq!(exported["fallback"], json!(null));
    assert_eq!(exported["providers"], json!(["A", "B"]));
    assert_eq!(exported["key"], json!("env(\"APP_KEY\")"));
}

#[test]
fn to_json_numbers_unkeyed_entries_like_the_source_language() {
    let doc = doc("<?php return ['mixed' => ['a', 'k' => 'v', 5 => 'x', 'b']];");

    let exported = doc.to_json().unwrap();
    assert_eq!(exported["mixed"]["0"], json!("a"));
    assert_eq!(exported["mixed"]["k"], json!("v"));
    assert_eq!(exported["mixed"]["5"], json!("x"));
    assert_eq!(exported["mixed"]["6"], json!("b"));
}
