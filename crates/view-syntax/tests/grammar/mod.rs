//! Grammar tests
//!
//! These tests run the raw pest grammar without building an AST.

mod declarations;
