use view_syntax::{
    DiagnosticKind, builder::parse, errors::has_errors, semantic::symbol_table::SymbolTable,
    semantic::validator::validate,
};

#[test]
fn test_duplicate_view_names_are_errors() {
    let doc = parse(
        r#"
view OrderSummary from orders { orders.id }
view order_summary from orders { orders.id }
"#,
    )
    .unwrap();

    let mut symbols = SymbolTable::new();
    let issues = validate(&doc, &mut symbols);

    assert!(has_errors(&issues));
    assert_eq!(issues.len(), 1);
    match &issues[0].kind {
        DiagnosticKind::DuplicateName { first_location, .. } => {
            assert_eq!(first_location.line, 2);
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }
    assert_eq!(issues[0].span.line, 3);
}

#[test]
fn test_schema_qualified_names_are_distinct() {
    let doc = parse(
        r#"
view sales.summary from orders { orders.id }
view finance.summary from orders { orders.id }
"#,
    )
    .unwrap();

    let mut symbols = SymbolTable::new();
    assert!(validate(&doc, &mut symbols).is_empty());
    assert_eq!(symbols.view_count(), 2);
    assert!(symbols.contains_view("Sales.Summary"));
}

#[test]
fn test_unique_names_pass() {
    let doc = parse("view a from t { t.id }\nview b from t { t.id }").unwrap();
    let mut symbols = SymbolTable::new();
    assert!(!has_errors(&validate(&doc, &mut symbols)));
}
