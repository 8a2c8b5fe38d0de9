//! Projected columns.
//!
//! A column is exactly one of four kinds. Interpretation picks the kind in
//! the priority aggregation, window, unresolved expression, plain reference;
//! after that the kinds are exclusive by construction.

use crate::transform::order::OrderTerm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub kind: ColumnKind,
    pub alias: Option<String>,
}

impl Column {
    pub fn new(kind: ColumnKind) -> Self {
        Column { kind, alias: None }
    }

    pub fn plain(table: impl Into<String>, column: impl Into<String>) -> Self {
        Column::new(ColumnKind::Plain(ColumnRef::new(table, column)))
    }

    pub fn expression(text: impl Into<String>) -> Self {
        Column::new(ColumnKind::Expression(text.into()))
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The column reference the head resolved to, if any.
    pub fn source_column(&self) -> Option<&ColumnRef> {
        match &self.kind {
            ColumnKind::Plain(column) => Some(column),
            ColumnKind::Expression(_) => None,
            ColumnKind::Aggregate(agg) => agg.input.as_column(),
            ColumnKind::Window(window) => window.input.as_column(),
        }
    }

    /// Alias, else the resolved column name.
    pub fn output_name(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .or_else(|| self.source_column().map(|c| c.column.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnKind {
    Plain(ColumnRef),
    /// Opaque dotted-name serialization; may be empty.
    Expression(String),
    Aggregate(Aggregation),
    Window(WindowFunction),
}

/// `table.column`; an empty table means unqualified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        ColumnRef {
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.table.is_empty()
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_qualified() {
            write!(f, "{}.{}", self.table, self.column)
        } else {
            write!(f, "{}", self.column)
        }
    }
}

/// What an aggregate or window function is applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnInput {
    Column(ColumnRef),
    Expression(String),
}

impl ColumnInput {
    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            ColumnInput::Column(column) => Some(column),
            ColumnInput::Expression(_) => None,
        }
    }
}

impl std::fmt::Display for ColumnInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnInput::Column(column) => write!(f, "{}", column),
            ColumnInput::Expression(text) => write!(f, "{}", text),
        }
    }
}

/// `agg: sum { partition_by: ..., order_by: ... }`. A non-empty
/// `partition_by` makes this a windowed aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub function: String,
    pub input: ColumnInput,
    pub partition_by: Vec<String>,
    pub order_by: Vec<OrderTerm>,
}

impl Aggregation {
    pub fn is_windowed(&self) -> bool {
        !self.partition_by.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFunction {
    pub function: String,
    pub input: ColumnInput,
    pub partition_by: Vec<String>,
    pub order_by: Vec<OrderTerm>,
    /// Emitted verbatim.
    pub frame: Option<String>,
}
