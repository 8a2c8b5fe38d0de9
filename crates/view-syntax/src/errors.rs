use crate::{ast::span::Span, parser::Rule};
use pest::error::{Error as PestError, LineColLocation};
use std::fmt;
use thiserror::Error;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Closed set of problems reported while validating and interpreting views.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    Unsupported {
        construct: String,
    },
    UnexpectedToken {
        expected: Option<String>,
        found: String,
    },
    InvalidName {
        name: String,
        hint: Option<String>,
    },
    InvalidColumn {
        reason: String,
    },
    DuplicateName {
        name: String,
        first_location: Span,
    },
    InvalidContext {
        setting: String,
        context: String,
    },
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::Unsupported { .. } => "UNSUPPORTED",
            DiagnosticKind::UnexpectedToken { .. } => "UNEXPECTED_TOKEN",
            DiagnosticKind::InvalidName { .. } => "INVALID_NAME",
            DiagnosticKind::InvalidColumn { .. } => "INVALID_COLUMN",
            DiagnosticKind::DuplicateName { .. } => "DUPLICATE_NAME",
            DiagnosticKind::InvalidContext { .. } => "INVALID_CONTEXT",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Unsupported { construct } => {
                write!(f, "unsupported: {}", construct)
            }
            DiagnosticKind::UnexpectedToken {
                expected: Some(expected),
                found,
            } => {
                write!(f, "expected {} but found {}", expected, found)
            }
            DiagnosticKind::UnexpectedToken {
                expected: None,
                found,
            } => {
                write!(f, "unexpected token '{}'", found)
            }
            DiagnosticKind::InvalidName { name, hint } => {
                write!(f, "invalid name '{}'", name)?;
                if let Some(hint) = hint {
                    write!(f, " ({})", hint)?;
                }
                Ok(())
            }
            DiagnosticKind::InvalidColumn { reason } => {
                write!(f, "invalid column: {}", reason)
            }
            DiagnosticKind::DuplicateName { name, first_location } => {
                write!(
                    f,
                    "duplicate name '{}' (first declared at {})",
                    name, first_location
                )
            }
            DiagnosticKind::InvalidContext { setting, context } => {
                write!(f, "'{}' is not valid {}", setting, context)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Error,
            kind,
            span,
            message,
        }
    }

    pub fn warning(kind: DiagnosticKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Warning,
            kind,
            span,
            message,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] at line {}, column {}: {}",
            self.severity,
            self.kind.code(),
            self.span.line,
            self.span.column,
            self.message
        )
    }
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Error type for AST building
#[derive(Debug, Clone, Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct BuildError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl BuildError {
    pub fn at(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };

        BuildError {
            message: format!("Syntax error: {}", err.variant.message()),
            line,
            column,
        }
    }
}
