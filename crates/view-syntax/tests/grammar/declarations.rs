//! Grammar tests for view declarations, bodies and settings

use pest::Parser;
use view_syntax::parser::{Rule, ViewParser};

#[test]
fn test_parse_empty_document() {
    assert!(ViewParser::parse(Rule::program, "").is_ok());
    assert!(ViewParser::parse(Rule::program, "  // nothing here\n").is_ok());
}

#[test]
fn test_parse_view_headers() {
    let inputs = vec![
        "view order_summary { }",
        "view analytics.order_summary from orders { }",
        "VIEW OrderSummary FROM orders, customers { }",
        "view v from shop.orders { }",
    ];

    for input in inputs {
        let result = ViewParser::parse(Rule::program, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_statements_and_columns() {
    let input = r#"
view analytics.customer_orders from orders, customers {
    /* projected columns */
    customers.id
    customers.name [as: customer_name]
    orders.total [agg: sum, as: total_spent]

    join: orders.customer_id = customers.id
    where: orders.status = "completed"
    group_by: customers.id, customers.name
    order_by: total_spent desc
    limit: 100
}
"#;
    let result = ViewParser::parse(Rule::program, input);
    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn test_parse_nested_settings() {
    let input = r#"
view ranked from orders {
    orders.total [window: row_number { partition_by: orders.region, order_by: orders.total desc, frame: rows }]
}
"#;
    assert!(ViewParser::parse(Rule::program, input).is_ok());
}

#[test]
fn test_parse_standalone_settings_line() {
    let input = r#"
view v from orders {
    orders.id
    [as: order_id]
}
"#;
    assert!(ViewParser::parse(Rule::program, input).is_ok());
}

#[test]
fn test_reject_unclosed_body() {
    let result = ViewParser::parse(Rule::program, "view v from orders { orders.id");
    assert!(result.is_err());
}

#[test]
fn test_reject_missing_view_name() {
    assert!(ViewParser::parse(Rule::program, "view from orders { }").is_err());
}

#[test]
fn test_reject_statement_without_value() {
    let result = ViewParser::parse(Rule::program, "view v from orders { limit: }");
    assert!(result.is_err());
}
