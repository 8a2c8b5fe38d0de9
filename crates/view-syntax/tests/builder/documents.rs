use view_syntax::{ast::expr::ExpressionKind, builder::parse};

#[test]
fn test_parse_multiple_views() {
    let input = r#"
        view first from orders { orders.id }
        view analytics.second from customers { customers.id }
    "#;

    let doc = parse(input).unwrap();
    assert_eq!(doc.views.len(), 2);
    assert!(matches!(doc.views[0].name.kind, ExpressionKind::Identifier(ref n) if n == "first"));
    assert!(matches!(
        doc.views[1].name.kind,
        ExpressionKind::DotNotation(ref p) if p.to_string() == "analytics.second"
    ));
}

#[test]
fn test_view_without_source_clause() {
    let doc = parse("view lonely { }").unwrap();
    assert_eq!(doc.views.len(), 1);
    assert!(doc.views[0].sources.is_none());
    assert!(doc.views[0].body.is_empty());
}

#[test]
fn test_source_list_keeps_order() {
    let doc = parse("view v from orders, customers, shop.regions { }").unwrap();
    let sources = doc.views[0].sources.as_ref().unwrap();
    assert_eq!(sources.len(), 3);
    assert!(matches!(
        sources[2].kind,
        ExpressionKind::DotNotation(ref p) if p.segments == vec!["shop", "regions"]
    ));
}

#[test]
fn test_view_spans_track_lines() {
    let input = "// header\n\nview v from orders {\n  orders.id\n}\n";
    let doc = parse(input).unwrap();
    assert_eq!(doc.views[0].span.line, 3);
    assert_eq!(doc.views[0].body[0].span().line, 4);
}

#[test]
fn test_syntax_error_is_reported() {
    let err = parse("view v from orders {").unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.to_string().contains("Parse error at line 1"));
}

#[test]
fn test_document_serializes_to_json() {
    let doc = parse("view v from orders { orders.id [as: order_id] }").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["views"][0]["body"].as_array().unwrap().len(), 1);
}
