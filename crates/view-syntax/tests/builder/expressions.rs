//! Tests for expression parsing and AST building

use view_syntax::{
    ast::{
        expr::{Expression, ExpressionKind},
        literal::Literal,
        operator::{BinaryOperator, UnaryOperator},
        view::BodyEntry,
    },
    builder::parse,
};

fn where_expression(clause: &str) -> Expression {
    let doc = parse(&format!("view v from t {{ where: {} }}", clause)).unwrap();
    match &doc.views[0].body[0] {
        BodyEntry::Statement(stmt) => stmt.expression.clone(),
        other => panic!("expected statement, got {:?}", other),
    }
}

#[test]
fn test_precedence_of_logical_operators() {
    let expr = where_expression("t.a = 1 || t.b = 2 && t.c = 3");
    let (_, op, right) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOperator::Or);
    assert_eq!(right.as_binary().unwrap().1, BinaryOperator::And);
}

#[test]
fn test_multiplication_binds_tighter() {
    let expr = where_expression("t.a + t.b * 2 > 10");
    let (left, op, _) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOperator::GreaterThan);
    let (_, add, mul) = left.as_binary().unwrap();
    assert_eq!(add, BinaryOperator::Add);
    assert_eq!(mul.as_binary().unwrap().1, BinaryOperator::Multiply);
}

#[test]
fn test_unary_operators() {
    let expr = where_expression("!t.cancelled");
    assert!(matches!(
        expr.kind,
        ExpressionKind::Unary { operator: UnaryOperator::Not, .. }
    ));

    let expr = where_expression("t.total > -5");
    let (_, _, right) = expr.as_binary().unwrap();
    assert!(matches!(
        right.kind,
        ExpressionKind::Unary { operator: UnaryOperator::Negate, .. }
    ));
}

#[test]
fn test_grouping_is_preserved() {
    let expr = where_expression("(t.a + t.b) * 2 > 1");
    let (left, _, _) = expr.as_binary().unwrap();
    let (group, _, _) = left.as_binary().unwrap();
    assert!(matches!(group.kind, ExpressionKind::Grouped(_)));
}

#[test]
fn test_function_call_arguments() {
    let expr = where_expression("coalesce(t.a, 'none') != 'none'");
    let (call, _, right) = expr.as_binary().unwrap();
    match &call.kind {
        ExpressionKind::FunctionCall { name, arguments } => {
            assert_eq!(name, "coalesce");
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("expected call, got {:?}", other),
    }
    assert_eq!(right.kind, ExpressionKind::Literal(Literal::String("none".to_string())));
}

#[test]
fn test_boolean_and_null_literals() {
    let expr = where_expression("t.flag = true && t.note != null");
    let (left, _, right) = expr.as_binary().unwrap();
    let (_, _, flag) = left.as_binary().unwrap();
    let (_, _, note) = right.as_binary().unwrap();
    assert_eq!(flag.kind, ExpressionKind::Literal(Literal::Boolean(true)));
    assert_eq!(note.kind, ExpressionKind::Literal(Literal::Null));
}
