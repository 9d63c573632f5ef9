//! File-backed loading, saving, and merging.

use retcon::doc::DocError;
use retcon::{Document, Error, Value};

use crate::helpers::*;

#[test]
fn load_fails_for_missing_file() {
    let err = Document::load("/non/existent/path.php").unwrap_err();
    assert!(matches!(err, Error::Doc(DocError::FileNotFound { .. })));
    assert!(err.is_not_found());
}

#[test]
fn load_appends_the_conventional_extension() {
    let (_dir, path) = write_config("app.php", SAMPLE);
    let without_ext = path.with_extension("");

    let doc = Document::load(&without_ext).unwrap();
    assert!(doc.has("app.name"));
    assert_eq!(doc.file_path(), Some(path.as_path()));
}

#[test]
fn load_keeps_an_explicit_php_extension() {
    let (_dir, path) = write_config("app.php", SAMPLE);
    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.file_path(), Some(path.as_path()));
}

#[test]
fn load_rejects_sources_without_a_returned_array() {
    let cases = [
        "<?php echo 'hi';",
        "<?php return 42;",
        "not php at all",
    ];
    for (i, source) in cases.iter().enumerate() {
        let (_dir, path) = write_config(&format!("bad{i}.php"), source);
        let err = Document::load(&path).unwrap_err();
        assert!(err.is_syntax_error(), "{source}");
    }
}

#[test]
fn save_writes_back_to_the_backing_file() {
    let (_dir, path) = write_config("app.php", SAMPLE);

    let mut doc = Document::load(&path).unwrap();
    doc.set("app.name", "Renamed").unwrap();
    doc.save().unwrap();

    let reloaded = Document::load(&path).unwrap();
    assert_eq!(reloaded.get("app.name").and_then(Value::as_str), Some("Renamed"));
}

#[test]
fn save_requires_a_backing_file() {
    let doc = sample();
    let err = doc.save().unwrap_err();
    assert!(matches!(err, Error::Doc(DocError::NoBackingFile)));
}

#[test]
fn save_to_writes_an_explicit_path() {
    let (_dir, path) = write_config("app.php", SAMPLE);
    let copy = path.with_file_name("copy.php");

    let doc = Document::load(&path).unwrap();
    doc.save_to(&copy).unwrap();

    let reloaded = Document::load(&copy).unwrap();
    assert_eq!(reloaded.to_source(), doc.to_source());
    // the backing file association is unchanged
    assert_eq!(doc.file_path(), Some(path.as_path()));
}

#[test]
fn saved_output_is_print_stable() {
    let (_dir, path) = write_config("app.php", SAMPLE);

    let doc = Document::load(&path).unwrap();
    doc.save().unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let doc = Document::load(&path).unwrap();
    doc.save().unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn merge_file_pulls_in_another_config() {
    let (_dir, path) = write_config("app.php", SAMPLE);
    let (_dir2, overlay) = write_config(
        "overlay.php",
        "<?php\n\nreturn [\n    'app' => [\n        'version' => '2.0.0',\n    ],\n    'new_section' => [\n        'key' => 'value',\n    ],\n];\n",
    );

    let mut doc = Document::load(&path).unwrap();
    doc.merge_file(&overlay).unwrap();
    doc.save().unwrap();

    let reloaded = Document::load(&path).unwrap();
    assert!(reloaded.has("new_section.key"));
    assert_eq!(reloaded.get("app.version").and_then(Value::as_str), Some("2.0.0"));
    assert_eq!(reloaded.get("app.name").and_then(Value::as_str), Some("Test App"));
}

#[test]
fn merge_file_fails_for_missing_file() {
    let mut doc = sample();
    let err = doc.merge_file("/non/existent/overlay").unwrap_err();
    assert!(matches!(err, Error::Doc(DocError::FileNotFound { .. })));
}
