//! Format specification and template parsing

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::{Align, Directive, Sign, Verb};
pub use grammar::parse_spec;
