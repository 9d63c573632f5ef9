use std::path::PathBuf;

use retcon::Document;
use tempfile::TempDir;

/// A config source shaped like a typical application config file.
pub const SAMPLE: &str = r#"<?php

return [
    'app' => [
        'name' => 'Test App',
        'debug' => true,
    ],
    'database' => [
        'driver' => 'mysql',
        'host' => 'localhost',
    ],
];
"#;

/// Parses the sample config.
pub fn sample() -> Document {
    Document::parse(SAMPLE).expect("sample config should parse")
}

/// Parses an arbitrary source, panicking with context on failure.
pub fn doc(source: &str) -> Document {
    Document::parse(source).unwrap_or_else(|err| panic!("source should parse: {err}\n{source}"))
}

/// Writes a config source into a fresh temp dir, returning the dir (keep it
/// alive) and the file path.
pub fn write_config(name: &str, source: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, source).expect("write config");
    (dir, path)
}

/// Collects the top-level keys of a document in order.
pub fn root_keys(doc: &Document) -> Vec<String> {
    doc.root().keys().map(str::to_string).collect()
}
