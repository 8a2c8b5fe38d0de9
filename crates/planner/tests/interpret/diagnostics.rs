use planner::{Session, interpret};
use view_syntax::{DiagnosticKind, Severity, builder::parse, errors::has_errors};

#[test]
fn test_limit_diagnostics() {
    let doc = parse("view v from orders { limit: abc }").unwrap();
    let result = interpret(&doc.views[0]);

    assert_eq!(result.transform.limit, None);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(matches!(
        result.diagnostics[0].kind,
        DiagnosticKind::InvalidName { ref name, .. } if name == "abc"
    ));
    assert!(result.has_errors());
}

#[test]
fn test_large_limit_is_exact() {
    let doc = parse("view v from t { limit: 9007199254740993 }").unwrap();
    let result = interpret(&doc.views[0]);

    assert_eq!(result.transform.limit, Some(9_007_199_254_740_993));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_unknown_keyword_with_list_is_reported_once() {
    let doc =
        parse("view v from orders { orders.id\n pivot: orders.status, orders.region }").unwrap();
    let result = interpret(&doc.views[0]);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind.code(), "UNEXPECTED_TOKEN");
}

#[test]
fn test_unknown_keyword_is_reported_once() {
    let doc = parse(
        r#"
view v from orders {
    orders.id
    pivot: orders.status
}
"#,
    )
    .unwrap();
    let result = interpret(&doc.views[0]);

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert!(matches!(
        diagnostic.kind,
        DiagnosticKind::UnexpectedToken { ref found, .. } if found == "pivot"
    ));
    assert_eq!(diagnostic.span.line, 4);
    assert_eq!(result.transform.columns.len(), 1);
    assert!(result.transform.filters.is_empty());
}

#[test]
fn test_interpretation_continues_after_errors() {
    let doc = parse(
        r#"
view a.b.c {
    [as: nothing]
    join: orders
    orders.id
    limit: 7
}
"#,
    )
    .unwrap();
    let result = interpret(&doc.views[0]);

    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.kind.code()).collect();
    assert_eq!(
        codes,
        vec!["UNSUPPORTED", "UNEXPECTED_TOKEN", "INVALID_COLUMN", "INVALID_NAME"]
    );
    assert_eq!(result.transform.name, "c");
    assert_eq!(result.transform.columns.len(), 1);
    assert_eq!(result.transform.limit, Some(7));
}

#[test]
fn test_session_merges_validation_and_interpretation() {
    let doc = parse(
        r#"
view summary from orders { orders.total [partition_by: orders.region] }
view Summary from orders { limit: many }
"#,
    )
    .unwrap();

    let mut session = Session::new();
    let diagnostics = session.compile(&doc);

    assert!(has_errors(&diagnostics));
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    assert_eq!(warnings, 1);
    assert!(diagnostics.iter().any(|d| d.kind.code() == "DUPLICATE_NAME"));
    assert!(diagnostics.iter().any(|d| d.kind.code() == "INVALID_NAME"));
    assert_eq!(session.transforms().len(), 2);
}
