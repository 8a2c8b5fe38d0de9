//! AST builder tests
//!
//! These tests verify that view definition text is correctly parsed
//! into a typed AST structure.

mod documents;
mod expressions;
mod statements;
