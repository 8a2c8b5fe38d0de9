use crate::ast::{expr::Expression, ident::Identifier, span::Span};
use serde::{Deserialize, Serialize};

/// Column setting, e.g. `as: order_id` or `window: lag { order_by: orders.id }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: Identifier,
    pub value: Option<Expression>,
    pub nested: Vec<Attribute>,
    pub span: Span,
}

impl Attribute {
    /// First nested setting with the given name (case-insensitive).
    pub fn nested_setting(&self, name: &str) -> Option<&Attribute> {
        self.nested.iter().find(|attr| attr.key.is(name))
    }
}
