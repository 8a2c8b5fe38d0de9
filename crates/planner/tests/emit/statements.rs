use model::transform::Transform;
use planner::{
    Session,
    emit::{
        EmitError,
        sql::{emit, emit_all},
    },
    interpret,
    query::dialect::SqlDialect,
};
use view_syntax::builder::parse;

fn transform_of(text: &str) -> Transform {
    let doc = parse(text).unwrap();
    interpret(&doc.views[0]).transform
}

fn position(sql: &str, needle: &str) -> usize {
    sql.find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in:\n{}", needle, sql))
}

#[test]
fn test_clause_order() {
    let transform = transform_of(
        r#"
view active_customers from orders, customers {
    customers.id
    orders.total [agg: sum, as: total_spent]
    join: orders.customer_id = customers.id
    where: orders.is_active
    group_by: customers.id
    order_by: orders.total desc
    limit: 25
}
"#,
    );
    let sql = emit(&transform, SqlDialect::Postgres).unwrap();

    let marks = [
        "SELECT ",
        r#"AS "total_spent""#,
        r#"FROM "orders""#,
        r#"INNER JOIN "customers" ON "orders"."customer_id" = "customers"."id""#,
        "WHERE orders.is_active",
        r#"GROUP BY "customers"."id""#,
        r#"ORDER BY "orders"."total" DESC"#,
        "LIMIT 25",
    ];
    let positions: Vec<_> = marks.iter().map(|mark| position(&sql, mark)).collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "clauses out of order:\n{}",
        sql
    );
    assert!(sql.starts_with("-- PostgreSQL view: active_customers\n"));
    assert!(sql.ends_with(";"));
}

#[test]
fn test_invalid_limit_is_omitted() {
    let valid = transform_of("view v from orders { orders.id\n limit: 10 }");
    let invalid = transform_of("view v from orders { orders.id\n limit: abc }");

    assert!(
        emit(&valid, SqlDialect::Postgres)
            .unwrap()
            .contains("LIMIT 10")
    );
    assert!(
        !emit(&invalid, SqlDialect::Postgres)
            .unwrap()
            .contains("LIMIT")
    );
}

#[test]
fn test_unknown_keyword_does_not_change_output() {
    let plain = transform_of("view v from orders { orders.id }");
    let noisy = transform_of("view v from orders { orders.id\n pivot: orders.status }");

    assert_eq!(
        emit(&plain, SqlDialect::Snowflake).unwrap(),
        emit(&noisy, SqlDialect::Snowflake).unwrap()
    );
}

#[test]
fn test_order_by_list_forms() {
    let split = transform_of(
        "view v from orders { orders.id\n order_by: orders.created_at desc, orders.id }",
    );
    let bracketed = transform_of(
        "view v from orders { orders.id\n order_by: [orders.created_at desc, orders.id] }",
    );

    let sql = emit(&split, SqlDialect::Postgres).unwrap();
    assert!(sql.contains(r#"ORDER BY "orders"."created_at" DESC, "orders"."id" ASC"#));

    assert!(bracketed.order_by.is_none());
    assert!(
        !emit(&bracketed, SqlDialect::Postgres)
            .unwrap()
            .contains("ORDER BY")
    );
}

#[test]
fn test_emit_all_joins_statements() {
    let doc = parse(
        r#"
view first from orders { orders.id }
view second from customers { customers.id }
"#,
    )
    .unwrap();
    let mut session = Session::new();
    assert!(session.compile(&doc).is_empty());

    let sql = emit_all(session.transforms(), SqlDialect::MySql).unwrap();
    let first = position(&sql, "-- MySQL view: first");
    let second = position(&sql, "-- MySQL view: second");
    assert!(first < second);
    assert_eq!(sql.matches("CREATE OR REPLACE VIEW").count(), 2);
    assert!(sql.contains(";\n-- MySQL view: second"));
}

#[test]
fn test_emit_all_aborts_on_missing_sources() {
    let doc = parse(
        r#"
view ok from orders { orders.id }
view broken { orders.id }
"#,
    )
    .unwrap();
    let mut session = Session::new();
    session.compile(&doc);

    let err = emit_all(session.transforms(), SqlDialect::Sqlite).unwrap_err();
    assert!(matches!(err, EmitError::NoSources { ref view } if view == "broken"));
}
