/*! Integration tests for retcon.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - editor: Tests for the path-addressed editing operations on Document
 * - merge: Tests for the recursive deep-merge of two documents
 * - roundtrip: Tests for the print/load/print stability of rendered sources
 * - io: Tests for file-backed loading, saving, and merging
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("retcon=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod io;
mod roundtrip;
