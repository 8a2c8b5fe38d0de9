//! Emission tests
//!
//! End-to-end runs from DSL text to view statements and build artifacts.

mod statements;
