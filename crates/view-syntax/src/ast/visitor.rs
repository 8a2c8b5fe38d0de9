use crate::ast::{
    attribute::Attribute,
    doc::ViewDocument,
    expr::Expression,
    view::{BodyEntry, ColumnEntry, StatementEntry, ViewDeclaration},
};

/// Visitor trait for AST traversal
pub trait AstVisitor {
    fn visit_document(&mut self, doc: &ViewDocument) {
        for view in &doc.views {
            self.visit_view(view);
        }
    }

    fn visit_view(&mut self, view: &ViewDeclaration) {
        for entry in &view.body {
            match entry {
                BodyEntry::Column(column) => self.visit_column(column),
                BodyEntry::Statement(statement) => self.visit_statement(statement),
            }
        }
    }

    fn visit_column(&mut self, column: &ColumnEntry) {
        for attr in column.attributes.iter().flatten() {
            self.visit_attribute(attr);
        }
    }

    fn visit_statement(&mut self, _statement: &StatementEntry) {}
    fn visit_expression(&mut self, _expr: &Expression) {}
    fn visit_attribute(&mut self, _attr: &Attribute) {}
}
