use planner::{emit::EmitError, settings::SettingsError};
use thiserror::Error;
use view_syntax::BuildError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the view definitions: {0}")]
    Parse(#[from] BuildError),

    #[error("Failed to emit: {0}")]
    Emit(#[from] EmitError),

    #[error("Failed to load artifact settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid dialect provided: {0}")]
    InvalidDialect(String),

    #[error("{0} error diagnostic(s) reported")]
    DiagnosticsFailed(usize),
}
