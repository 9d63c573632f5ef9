//! Source-dialect support: the loader, the printer, and the expression
//! sub-parser.
//!
//! The core document model never touches source text itself; it goes through
//! this module's three entry points:
//!
//! - the loader parses `<?php return [ ... ];` sources into the document
//!   tree, degrading anything it cannot represent (function calls,
//!   constants, interpolated strings) to verbatim raw expressions;
//! - the printer renders a tree back to source text, deterministically and
//!   idempotently: `print(parse(print(doc))) == print(doc)`;
//! - the expression sub-parser ([`parse_expression`]) turns one piece of
//!   code into a value for the raw editing operations.
//!
//! Comment preservation is out of scope: the loader skips comments and the
//! printer never emits them.

pub mod errors;

mod expr;
mod parse;
mod render;


pub use errors::SyntaxError;
pub use expr::{RawExpr, parse_expression};

pub(crate) use parse::document as parse_document;
pub(crate) use render::{document_source, value_source};
