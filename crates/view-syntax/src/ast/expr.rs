use crate::ast::{
    dotpath::DotPath,
    literal::Literal,
    operator::{BinaryOperator, UnaryOperator},
    span::Span,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression { kind, span }
    }

    pub fn identifier(name: &str, span: Span) -> Self {
        Expression::new(ExpressionKind::Identifier(name.to_string()), span)
    }

    pub fn dotted(path: &str, span: Span) -> Self {
        Expression::new(
            ExpressionKind::DotNotation(DotPath::from_string(path, span)),
            span,
        )
    }

    /// Returns `(left, operator, right)` if this is a binary expression.
    pub fn as_binary(&self) -> Option<(&Expression, BinaryOperator, &Expression)> {
        match &self.kind {
            ExpressionKind::Binary {
                left,
                operator,
                right,
            } => Some((left, *operator, right)),
            _ => None,
        }
    }
}

/// Expression types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    Literal(Literal),
    Identifier(String),
    DotNotation(DotPath),
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// Juxtaposed terms, e.g. `orders.created_at desc`.
    Sequence(Vec<Expression>),
    Grouped(Box<Expression>),
}
