//! View interpretation.
//!
//! Walks one declaration and produces a best-effort [`Transform`] plus the
//! diagnostics collected along the way. Interpretation never fails; callers
//! decide whether any diagnostic blocks downstream use.

use std::collections::HashSet;

use model::transform::{Source, Transform};
use tracing::debug;
use view_syntax::{
    ast::{
        expr::{Expression, ExpressionKind},
        span::Span,
        view::{BodyEntry, ViewDeclaration},
    },
    decompose,
    errors::{Diagnostic, DiagnosticKind, has_errors},
};

mod column;
mod order;
mod statement;

pub use order::order_terms;

#[derive(Debug, Clone)]
pub struct Interpretation {
    pub transform: Transform,
    pub diagnostics: Vec<Diagnostic>,
}

impl Interpretation {
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

/// Interprets a single view declaration.
pub fn interpret(view: &ViewDeclaration) -> Interpretation {
    let mut interpreter = ViewInterpreter::new();

    interpreter.resolve_name(&view.name);
    interpreter.resolve_sources(view.sources.as_deref(), view.span);
    for entry in &view.body {
        match entry {
            BodyEntry::Column(column) => interpreter.resolve_column(column),
            BodyEntry::Statement(statement) => interpreter.resolve_statement(statement),
        }
    }

    interpreter.finish()
}

pub(crate) struct ViewInterpreter {
    transform: Transform,
    diagnostics: Vec<Diagnostic>,
    /// Statements already reported for an unknown keyword.
    unknown_statements: HashSet<Span>,
}

impl ViewInterpreter {
    fn new() -> Self {
        ViewInterpreter {
            transform: Transform::default(),
            diagnostics: Vec::new(),
            unknown_statements: HashSet::new(),
        }
    }

    fn finish(self) -> Interpretation {
        debug!(
            "Interpreted view '{}': {} source(s), {} column(s), {} join(s), {} diagnostic(s)",
            self.transform.qualified_name(),
            self.transform.sources.len(),
            self.transform.columns.len(),
            self.transform.joins.len(),
            self.diagnostics.len()
        );

        Interpretation {
            transform: self.transform,
            diagnostics: self.diagnostics,
        }
    }

    pub(crate) fn report(&mut self, kind: DiagnosticKind, span: Span) {
        let diagnostic = Diagnostic::error(kind, span);
        debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn warn(&mut self, kind: DiagnosticKind, span: Span) {
        let diagnostic = Diagnostic::warning(kind, span);
        debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn resolve_name(&mut self, name: &Expression) {
        let mut fragments = decompose::name_fragments(name).unwrap_or_default();
        let Some(last) = fragments.pop() else {
            return;
        };

        if fragments.len() > 1 {
            self.report(
                DiagnosticKind::Unsupported {
                    construct: format!(
                        "multi-level schema '{}' in view name; only one schema level is supported",
                        fragments.join(".")
                    ),
                },
                name.span,
            );
        }

        self.transform.name = last;
        if !fragments.is_empty() {
            self.transform.schema_name = Some(fragments.join("."));
        }
    }

    fn resolve_sources(&mut self, sources: Option<&[Expression]>, span: Span) {
        let Some(sources) = sources else {
            self.report(
                DiagnosticKind::UnexpectedToken {
                    expected: Some("a 'from' source list".to_string()),
                    found: "view body".to_string(),
                },
                span,
            );
            return;
        };

        for expr in sources {
            let mut fragments = decompose::name_fragments(expr).unwrap_or_default();
            let Some(name) = fragments.pop() else {
                self.report(
                    DiagnosticKind::InvalidName {
                        name: describe(expr),
                        hint: Some("sources are names such as orders or sales.orders".to_string()),
                    },
                    expr.span,
                );
                continue;
            };

            let mut source = Source::new(name);
            if !fragments.is_empty() {
                source.schema_name = Some(fragments.join("."));
            }
            self.transform.sources.push(source);
        }
    }
}

/// Short human-readable form of an expression for diagnostics.
pub(crate) fn describe(expr: &Expression) -> String {
    match &expr.kind {
        ExpressionKind::Literal(literal) => literal.to_string(),
        ExpressionKind::FunctionCall { name, .. } => format!("{}(...)", name),
        ExpressionKind::Binary { operator, .. } => format!("'{}' expression", operator),
        ExpressionKind::Unary { operator, operand } => format!("{}{}", operator, describe(operand)),
        ExpressionKind::Array(_) => "list".to_string(),
        ExpressionKind::Grouped(inner) => describe(inner),
        _ => decompose::name_chain(expr),
    }
}
