//! Defines the AST for SQL expressions.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column identifier, e.g., `id` or `orders.id`.
    Identifier(Ident),

    /// Opaque text emitted verbatim, e.g. a filter.
    Raw(String),

    /// `*`
    Wildcard,

    /// A function call, e.g., `SUM(orders.total)` or `ROW_NUMBER()`.
    FunctionCall(FunctionCall),

    /// A function applied over a window, e.g. `RANK() OVER (PARTITION BY ...)`.
    Window {
        call: FunctionCall,
        over: WindowSpec,
    },

    /// A comparison, e.g. `orders.customer_id = customers.id`.
    Comparison(Box<Comparison>),

    /// Conditions joined with `AND`, without parentheses.
    And(Vec<Expr>),

    /// An aliased expression, e.g. `SUM(total) AS total_spent`.
    Alias { expr: Box<Expr>, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'orders' in 'orders.id'
    pub name: String,              // e.g., the 'id' in 'orders.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSpec {
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByExpr>,
    /// Frame clause, emitted verbatim.
    pub frame: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: super::common::OrderDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Expr,
    pub op: &'static str,
    pub right: Expr,
}
