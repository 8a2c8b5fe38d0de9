use crate::ast::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dot-separated path (e.g., analytics.orders, orders.customer_id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotPath {
    pub segments: Vec<String>,
    pub span: Span,
}

impl DotPath {
    pub fn new(segments: Vec<String>, span: Span) -> Self {
        Self { segments, span }
    }

    pub fn from_string(path: &str, span: Span) -> Self {
        Self {
            segments: path.split('.').map(|s| s.to_string()).collect(),
            span,
        }
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
