use view_syntax::{
    ast::{
        expr::ExpressionKind,
        literal::Literal,
        operator::BinaryOperator,
        view::{BodyEntry, StatementEntry},
    },
    builder::parse,
};

fn statements(input: &str) -> Vec<StatementEntry> {
    let doc = parse(input).unwrap();
    doc.views[0]
        .body
        .iter()
        .filter_map(|entry| match entry {
            BodyEntry::Statement(statement) => Some(statement.clone()),
            BodyEntry::Column(_) => None,
        })
        .collect()
}

#[test]
fn test_join_statement() {
    let stmts = statements("view v from orders, customers { join: orders.customer_id = customers.id }");
    assert_eq!(stmts.len(), 1);
    assert!(stmts[0].keyword.is("join"));

    let (left, op, right) = stmts[0].expression.as_binary().unwrap();
    assert_eq!(op, BinaryOperator::Equal);
    assert!(matches!(left.kind, ExpressionKind::DotNotation(_)));
    assert!(matches!(right.kind, ExpressionKind::DotNotation(_)));
}

#[test]
fn test_comma_list_splits_into_statements() {
    let stmts = statements("view v from orders { group_by: orders.region, orders.status }");
    assert_eq!(stmts.len(), 2);
    assert!(stmts.iter().all(|s| s.keyword.is("group_by")));
    assert_eq!(stmts[0].span, stmts[1].span);
}

#[test]
fn test_order_by_terms() {
    let stmts = statements("view v from orders { order_by: orders.created_at desc, orders.id }");
    assert_eq!(stmts.len(), 2);
    assert!(matches!(
        stmts[0].expression.kind,
        ExpressionKind::Sequence(ref items) if items.len() == 2
    ));
    assert!(matches!(stmts[1].expression.kind, ExpressionKind::DotNotation(_)));
}

#[test]
fn test_limit_number() {
    let stmts = statements("view v from orders { limit: 25 }");
    assert!(matches!(
        stmts[0].expression.kind,
        ExpressionKind::Literal(Literal::Number(ref text)) if text == "25"
    ));
}

#[test]
fn test_number_keeps_source_text() {
    let stmts = statements("view v from orders { limit: 9007199254740993 }");
    assert!(matches!(
        stmts[0].expression.kind,
        ExpressionKind::Literal(Literal::Number(ref text)) if text == "9007199254740993"
    ));
}

#[test]
fn test_keywords_keep_their_spelling() {
    let stmts = statements("view v from orders { WHERE: orders.total > 5 }");
    assert_eq!(stmts[0].keyword.name, "WHERE");
    assert!(stmts[0].keyword.is("where"));
}
