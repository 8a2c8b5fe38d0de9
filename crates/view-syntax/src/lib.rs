//! Front end for view definition documents: grammar, typed syntax tree,
//! name decomposition, diagnostics and semantic validation.

pub mod ast;
pub mod builder;
pub mod decompose;
pub mod errors;
pub mod parser;
pub mod semantic;

pub use builder::parse;
pub use errors::{BuildError, Diagnostic, DiagnosticKind, Severity};
