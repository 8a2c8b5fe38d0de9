//! Semantic validation tests
//!
//! These tests verify that the semantic validator reports duplicate
//! names and misplaced settings on parsed documents.

mod duplicates;
