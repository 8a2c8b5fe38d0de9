use crate::ast::{attribute::Attribute, expr::Expression, ident::Identifier, span::Span};
use serde::{Deserialize, Serialize};

/// View declaration
/// Syntax: view analytics.order_summary from orders, customers { ... }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDeclaration {
    pub name: Expression,
    pub sources: Option<Vec<Expression>>,
    pub body: Vec<BodyEntry>,
    pub span: Span,
}

/// One entry of a view body, distinguished by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyEntry {
    Column(ColumnEntry),
    Statement(StatementEntry),
}

impl BodyEntry {
    pub fn span(&self) -> Span {
        match self {
            BodyEntry::Column(column) => column.span,
            BodyEntry::Statement(statement) => statement.span,
        }
    }
}

/// Projected column: `orders.total [agg: sum, as: total_spent]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnEntry {
    pub expression: Option<Expression>,
    pub attributes: Option<Vec<Attribute>>,
    pub span: Span,
}

/// Keyword statement: `join: orders.customer_id = customers.id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub keyword: Identifier,
    pub expression: Expression,
    pub span: Span,
}
