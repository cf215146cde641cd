//! copydoc: structure marketing-copy drafts into a typed document model.
//!
//! Drafts carry a labeled metadata header ending at a bare `Content` line,
//! then a body of `(hN)`-marked sections. [`parse_document`] turns such text
//! into a [`Document`] whose sections are classified and, for tables, platform
//! reviews and disclaimers, sub-parsed into structured payloads.

pub mod document;
pub mod error;
pub mod loader;
pub mod options;
pub mod parser;
pub mod query;

pub use document::*;
pub use error::{Error, Result};
pub use loader::{load_document, parse_files};
pub use options::ParseOptions;
pub use parser::parse_document;
