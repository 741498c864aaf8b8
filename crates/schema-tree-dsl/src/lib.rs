//! # schema-tree-dsl
//!
//! Parser for the bracketed field notation, e.g. `(id, name, type(id, name))`.
//!
//! This crate provides:
//! - A lexer that locates the `(` and `)` symbols in the notation
//! - A single-pass parser that grows a [`TreeNode`](schema_tree_core::TreeNode)
//!   while tracking nesting depth from pairs of symbols
//! - Rendering of the parsed tree in original or alphabetical order
//!
//! # Example
//!
//! ```
//! use schema_tree_dsl::Parser;
//!
//! let mut parser = Parser::new("(id, name, type(name, id))").expect("parse failed");
//! assert_eq!(parser.output(), "- id\n- name\n- type\n\t- name\n\t- id");
//! assert_eq!(
//!     parser.output_alphabetical(),
//!     "- id\n- name\n- type\n\t- id\n\t- name"
//! );
//! ```

pub mod error;
pub mod parser;
pub mod scan;
pub mod symbol;

pub use error::{DslError, Span};
pub use parser::{parse, Parser};
pub use scan::{extract_items, symbol_positions, SymbolPositions};
pub use symbol::Symbol;
