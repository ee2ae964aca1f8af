//! # jot-core
//!
//! Tokenizer, recursive-descent parser, and document model for **JOT
//! (JSON-like Object Tree)** notation: objects, arrays, strings, numbers,
//! and booleans.
//!
//! Input is tokenized eagerly in one pass, parsed into an ordered
//! [`Document`](ast::Document) of values, and rendered back to canonical
//! text through `Display`. Failures come back as an ordered list of
//! human-readable diagnostics, never as a partial tree.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::parse;
//!
//! let document = parse(r#"{"name":"Ada","scores":[95, 87, true]}"#).unwrap();
//! assert_eq!(
//!     document.to_string(),
//!     r#"{"name":"Ada", "scores":[95, 87, true]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`token`] — lexical vocabulary (`Token`, `TokenKind`)
//! - [`tokenizer`] — eager whole-input tokenization
//! - [`parser`] — recursive-descent parser with a two-token window
//! - [`ast`] — `Value`/`Document` tree and canonical rendering
//! - [`json`] — conversion into `serde_json` values
//! - [`error`] — diagnostic types

pub mod ast;
pub mod error;
pub mod json;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use ast::{Attribute, Document, Value};
pub use error::{Diagnostic, Diagnostics};
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
