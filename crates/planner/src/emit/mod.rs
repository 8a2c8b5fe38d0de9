//! Code generation from Transforms.
//!
//! Interpretation collects diagnostics; code generation fails outright when
//! a Transform cannot be turned into a query at all.

use std::path::PathBuf;
use thiserror::Error;

pub mod artifact;
pub mod sql;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("View '{view}' has no sources to select from")]
    NoSources { view: String },

    #[error("View '{view}' writes model '{name}', which another view already uses")]
    DuplicateModel { name: String, view: String },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize the documentation manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
