//! Compilation session.
//!
//! Owns the name registry shared by every declaration and the map from
//! declaration to interpreted Transform. Components only read from or
//! insert into it.

use std::collections::HashMap;

use model::transform::Transform;
use tracing::{debug, info};
use view_syntax::{
    ast::{doc::ViewDocument, span::Span, view::ViewDeclaration},
    decompose,
    errors::Diagnostic,
    semantic::{symbol_table::SymbolTable, validator},
};

use crate::interpret::interpret;

/// One declaration of one compiled document.
///
/// Spans only locate a declaration inside its own text, so the document
/// number keeps equal spans from different documents apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationId {
    pub document: usize,
    pub span: Span,
}

#[derive(Debug, Default)]
pub struct Session {
    symbols: SymbolTable,
    transforms: Vec<Transform>,
    by_declaration: HashMap<DeclarationId, usize>,
    /// Document receiving interpretations; 0 until the first `compile`.
    document: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and interprets every view of `document`.
    ///
    /// Declarations without a usable name are rejected by validation and
    /// never interpreted. Everything else is interpreted, even when a
    /// diagnostic was reported for it.
    pub fn compile(&mut self, document: &ViewDocument) -> Vec<Diagnostic> {
        self.document += 1;
        let mut diagnostics = validator::validate(document, &mut self.symbols);

        for view in &document.views {
            if !has_name(view) {
                continue;
            }
            diagnostics.extend(self.interpret(view));
        }

        info!(
            "Compiled {} view(s) with {} diagnostic(s)",
            document.views.len(),
            diagnostics.len()
        );
        diagnostics
    }

    /// Interprets one declaration of the current document and records its
    /// Transform.
    pub fn interpret(&mut self, view: &ViewDeclaration) -> Vec<Diagnostic> {
        let interpretation = interpret(view);
        self.insert(self.declaration(view.span), interpretation.transform);
        interpretation.diagnostics
    }

    /// Identifies the declaration at `span` in the current document.
    pub fn declaration(&self, span: Span) -> DeclarationId {
        DeclarationId {
            document: self.document,
            span,
        }
    }

    fn insert(&mut self, declaration: DeclarationId, transform: Transform) {
        debug!("Registering transform '{}'", transform.qualified_name());
        match self.by_declaration.get(&declaration) {
            Some(&index) => self.transforms[index] = transform,
            None => {
                self.by_declaration.insert(declaration, self.transforms.len());
                self.transforms.push(transform);
            }
        }
    }

    pub fn transform_for(&self, declaration: &DeclarationId) -> Option<&Transform> {
        self.by_declaration
            .get(declaration)
            .and_then(|&index| self.transforms.get(index))
    }

    /// Transforms in declaration order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_transforms(self) -> Vec<Transform> {
        self.transforms
    }
}

fn has_name(view: &ViewDeclaration) -> bool {
    decompose::name_fragments(&view.name)
        .is_some_and(|fragments| !fragments.is_empty() && fragments.iter().all(|f| !f.is_empty()))
}
