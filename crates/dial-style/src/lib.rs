//! Lexer, parser, and AST for **dial style sheets** (`.dial`).
//!
//! A style sheet is a flat list of named sections holding `key: value`
//! pairs. The renderer crate decides what the sections mean; this crate
//! only knows the syntax.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `StyleDocument`, `Section`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use dial_style::parse_str;
//!
//! let src = r#"
//!     face { preset: classic  hour_hand_length: 50 }
//!     palette { second_hand: #e53935 }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.sections[0].name, "face");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Prop, Section, StyleDocument, Value};
pub use error::ParseError;
pub use parser::parse_str;
