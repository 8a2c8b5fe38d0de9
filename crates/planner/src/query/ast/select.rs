//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::query::ast::{
    common::{JoinKind, TableRef},
    expr::{Expr, OrderByExpr},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    /// e.g., `orders.id`, `SUM(orders.total) AS total_spent`
    pub columns: Vec<Expr>,

    /// The primary relation for the query.
    pub from: Option<FromClause>,

    /// A list of JOIN clauses, one per additional relation.
    pub joins: Vec<JoinClause>,

    /// The WHERE clause condition.
    pub where_clause: Option<Expr>,

    /// The GROUP BY clause.
    pub group_by: Vec<Expr>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,

    /// The LIMIT clause.
    pub limit: Option<u64>,
}

/// What a FROM or JOIN clause reads.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    /// A table, quoted by the dialect.
    Table(TableRef),
    /// Pre-rendered text, e.g. `{{ ref('orders') }}`.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub relation: Relation,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub relation: Relation,
    pub alias: Option<String>,
    /// The join condition; absent for CROSS JOIN.
    pub on: Option<Expr>,
}
