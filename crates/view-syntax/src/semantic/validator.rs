use crate::{
    ast::{
        attribute::Attribute,
        doc::ViewDocument,
        view::{BodyEntry, ColumnEntry, ViewDeclaration},
        visitor::AstVisitor,
    },
    decompose,
    errors::{Diagnostic, DiagnosticKind},
    semantic::symbol_table::SymbolTable,
};

/// Settings that only mean something nested under `agg` or `window`.
const NESTED_ONLY_SETTINGS: [&str; 3] = ["partition_by", "order_by", "frame"];

/// Structural and semantic checks run before interpretation.
pub struct SemanticValidator<'a> {
    symbols: &'a mut SymbolTable,
    issues: Vec<Diagnostic>,
}

impl<'a> SemanticValidator<'a> {
    pub fn new(symbols: &'a mut SymbolTable) -> Self {
        SemanticValidator {
            symbols,
            issues: Vec::new(),
        }
    }

    pub fn validate(mut self, document: &ViewDocument) -> Vec<Diagnostic> {
        self.visit_document(document);
        self.issues
    }

    fn register_name(&mut self, view: &ViewDeclaration) {
        let fragments = decompose::name_fragments(&view.name).unwrap_or_default();
        if fragments.is_empty() || fragments.iter().any(String::is_empty) {
            self.issues.push(Diagnostic::error(
                DiagnosticKind::InvalidContext {
                    setting: "view".to_string(),
                    context: "without a name".to_string(),
                },
                view.span,
            ));
            return;
        }

        let name = fragments.join(".");
        if let Some(first_location) = self.symbols.register_view(&name, view.name.span) {
            self.issues.push(Diagnostic::error(
                DiagnosticKind::DuplicateName {
                    name,
                    first_location,
                },
                view.name.span,
            ));
        }
    }

    fn check_nested_settings(&mut self, parent: &Attribute) {
        let is_window = parent.key.is("window");
        for nested in &parent.nested {
            if nested.key.is("frame") && !is_window {
                self.issues.push(Diagnostic::warning(
                    DiagnosticKind::InvalidContext {
                        setting: nested.key.name.clone(),
                        context: format!("inside '{}'; frames apply to window settings", parent.key),
                    },
                    nested.span,
                ));
            }
        }
    }
}

impl AstVisitor for SemanticValidator<'_> {
    fn visit_view(&mut self, view: &ViewDeclaration) {
        self.register_name(view);

        for entry in &view.body {
            if let BodyEntry::Column(column) = entry {
                self.visit_column(column);
            }
        }
    }

    fn visit_column(&mut self, column: &ColumnEntry) {
        for attr in column.attributes.iter().flatten() {
            self.visit_attribute(attr);
        }
    }

    fn visit_attribute(&mut self, attr: &Attribute) {
        if NESTED_ONLY_SETTINGS.iter().any(|name| attr.key.is(name)) {
            self.issues.push(Diagnostic::warning(
                DiagnosticKind::InvalidContext {
                    setting: attr.key.name.clone(),
                    context: "outside an agg or window setting".to_string(),
                },
                attr.span,
            ));
        }

        if attr.key.is("agg") || attr.key.is("window") {
            self.check_nested_settings(attr);
        }
    }
}

/// Validates `document`, registering every view name in `symbols`.
pub fn validate(document: &ViewDocument, symbols: &mut SymbolTable) -> Vec<Diagnostic> {
    SemanticValidator::new(symbols).validate(document)
}
