use crate::ast::{
    attribute::Attribute,
    doc::ViewDocument,
    expr::Expression,
    ident::Identifier,
    span::Span,
    view::{BodyEntry, ColumnEntry, ViewDeclaration},
};

/// Helper function to create a span
pub fn span(line: usize, col: usize) -> Span {
    Span::new(0, 10, line, col)
}

/// Helper to create a setting without nested settings
pub fn setting(key: &str, value: Expression, line: usize) -> Attribute {
    Attribute {
        key: Identifier::new(key, span(line, 5)),
        value: Some(value),
        nested: vec![],
        span: span(line, 5),
    }
}

/// Helper to create a column entry
pub fn column(expr: &str, attributes: Vec<Attribute>, line: usize) -> BodyEntry {
    BodyEntry::Column(ColumnEntry {
        expression: Some(Expression::dotted(expr, span(line, 3))),
        attributes: Some(attributes),
        span: span(line, 3),
    })
}

/// Helper to create a view over `orders`
pub fn view(name: &str, body: Vec<BodyEntry>, line: usize) -> ViewDeclaration {
    let name_expr = if name.contains('.') {
        Expression::dotted(name, span(line, 6))
    } else {
        Expression::identifier(name, span(line, 6))
    };

    ViewDeclaration {
        name: name_expr,
        sources: Some(vec![Expression::identifier("orders", span(line, 20))]),
        body,
        span: span(line, 1),
    }
}

pub fn document(views: Vec<ViewDeclaration>) -> ViewDocument {
    ViewDocument {
        views,
        span: span(1, 1),
    }
}
