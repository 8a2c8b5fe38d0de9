use model::transform::{
    ColumnInput, ColumnKind, ColumnRef, Join, OrderTerm, Source, SortDirection,
};
use planner::{Session, interpret};
use view_syntax::builder::parse;

const CUSTOMER_ORDERS: &str = r#"
// Lifetime value per customer
view analytics.customer_orders from orders, customers {
    customers.id
    customers.name [as: customer_name]
    orders.total [agg: sum, as: total_spent]
    orders.created_at [window: row_number { partition_by: customers.id, order_by: orders.created_at desc }, as: order_rank]

    join: orders.customer_id = customers.id
    where: orders.is_completed
    group_by: customers.id, customers.name
    order_by: customers.name asc
    limit: 100
}
"#;

#[test]
fn test_full_declaration() {
    let doc = parse(CUSTOMER_ORDERS).unwrap();
    let result = interpret(&doc.views[0]);
    let transform = &result.transform;

    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(transform.name, "customer_orders");
    assert_eq!(transform.schema_name.as_deref(), Some("analytics"));
    assert_eq!(
        transform.sources,
        vec![Source::new("orders"), Source::new("customers")]
    );

    assert_eq!(transform.columns.len(), 4);
    assert_eq!(
        transform.columns[0].kind,
        ColumnKind::Plain(ColumnRef::new("customers", "id"))
    );
    assert_eq!(transform.columns[1].alias.as_deref(), Some("customer_name"));

    match &transform.columns[2].kind {
        ColumnKind::Aggregate(agg) => {
            assert_eq!(agg.function, "sum");
            assert!(!agg.is_windowed());
        }
        other => panic!("expected aggregate, got {:?}", other),
    }

    match &transform.columns[3].kind {
        ColumnKind::Window(window) => {
            assert_eq!(window.function, "row_number");
            assert_eq!(
                window.input,
                ColumnInput::Column(ColumnRef::new("orders", "created_at"))
            );
            assert_eq!(window.partition_by, vec!["customers.id"]);
            assert_eq!(
                window.order_by,
                vec![OrderTerm::new("orders", "created_at", SortDirection::Desc)]
            );
        }
        other => panic!("expected window, got {:?}", other),
    }

    assert_eq!(
        transform.joins,
        vec![Join::new("orders", "customer_id", "customers", "id")]
    );
    assert_eq!(transform.filters[0].expression, "orders.is_completed");
    assert_eq!(
        transform.group_by,
        Some(vec!["customers.id".to_string(), "customers.name".to_string()])
    );
    assert_eq!(
        transform.order_by,
        Some(vec![OrderTerm::new("customers", "name", SortDirection::Asc)])
    );
    assert_eq!(transform.limit, Some(100));
    assert!(transform.derived_columns.is_none());
    assert!(transform.nested_transform.is_none());
}

#[test]
fn test_inert_placeholders_are_recorded() {
    let doc = parse(
        r#"
view enriched from orders {
    orders.id
    using: base_orders
    add: total_with_tax = orders.total_tax
}
"#,
    )
    .unwrap();
    let transform = interpret(&doc.views[0]).transform;

    assert_eq!(
        transform.nested_transform.map(|n| n.transform_name),
        Some("base_orders".to_string())
    );
    assert_eq!(transform.derived_columns.map(|d| d.len()), Some(1));
}

#[test]
fn test_session_compiles_documents() {
    let doc = parse(CUSTOMER_ORDERS).unwrap();
    let mut session = Session::new();

    let diagnostics = session.compile(&doc);
    assert!(diagnostics.is_empty());

    let transform = session
        .transform_for(&session.declaration(doc.views[0].span))
        .unwrap();
    assert_eq!(transform.qualified_name(), "analytics.customer_orders");
    assert!(session.symbols().contains_view("analytics.CustomerOrders"));
}

#[test]
fn test_transform_json_round_trip() {
    let doc = parse(CUSTOMER_ORDERS).unwrap();
    let transform = interpret(&doc.views[0]).transform;

    let json = serde_json::to_string(&transform).unwrap();
    let back: model::transform::Transform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, transform);
}
