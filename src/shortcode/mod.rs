//! Shortcode parsing for page content
//!
//! Finds `[tag attr="value"]` occurrences in text and turns their attribute
//! text into an untyped [`Attributes`] bag for the renderer.

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::{parse, parse_recovering};
