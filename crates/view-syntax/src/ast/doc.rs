use crate::ast::{span::Span, view::ViewDeclaration};
use serde::{Deserialize, Serialize};

/// Root document containing all top-level declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDocument {
    pub views: Vec<ViewDeclaration>,
    pub span: Span,
}
