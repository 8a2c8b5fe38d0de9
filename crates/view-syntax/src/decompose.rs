//! Reduces expressions to dotted-name fragments.
//!
//! Only name chains survive decomposition: identifiers, dotted paths,
//! numbers (by their textual form) and juxtaposed or bracketed lists of
//! those. Anything else (operators, calls, string literals) fails.

use crate::ast::{
    expr::{Expression, ExpressionKind},
    literal::Literal,
};

/// Ordered name fragments of `expr`, e.g. `orders.created_at desc` ->
/// `["orders", "created_at", "desc"]`.
pub fn name_fragments(expr: &Expression) -> Option<Vec<String>> {
    match &expr.kind {
        ExpressionKind::Identifier(name) => Some(vec![name.clone()]),
        ExpressionKind::DotNotation(path) => Some(path.segments.clone()),
        ExpressionKind::Literal(Literal::Number(text)) => Some(vec![text.clone()]),
        ExpressionKind::Sequence(items) | ExpressionKind::Array(items) => {
            let mut fragments = Vec::new();
            for item in items {
                fragments.extend(name_fragments(item)?);
            }
            Some(fragments)
        }
        ExpressionKind::Grouped(inner) => name_fragments(inner),
        _ => None,
    }
}

/// One token per list element with dotted names kept whole, e.g.
/// `[customers.id, region]` -> `["customers.id", "region"]`.
pub fn name_tokens(expr: &Expression) -> Option<Vec<String>> {
    match &expr.kind {
        ExpressionKind::Sequence(items) | ExpressionKind::Array(items) => {
            let mut tokens = Vec::new();
            for item in items {
                tokens.extend(name_tokens(item)?);
            }
            Some(tokens)
        }
        _ => name_fragments(expr).map(|fragments| vec![fragments.join(".")]),
    }
}

/// Exactly one fragment, e.g. an alias or function name.
pub fn single_name(expr: &Expression) -> Option<String> {
    match name_fragments(expr) {
        Some(mut fragments) if fragments.len() == 1 => fragments.pop(),
        _ => None,
    }
}

/// Dot-joined fragments, or an empty string when `expr` is not a name chain.
pub fn name_chain(expr: &Expression) -> String {
    name_fragments(expr)
        .map(|fragments| fragments.join("."))
        .unwrap_or_default()
}
