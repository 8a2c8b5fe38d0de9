use crate::query::ast::{common::TableRef, create_view::CreateView, select::Select};

#[derive(Debug, Clone)]
pub struct CreateViewBuilder {
    ast: CreateView,
}

impl CreateViewBuilder {
    pub fn new(view: TableRef, query: Select) -> Self {
        Self {
            ast: CreateView {
                comment: None,
                view,
                query,
            },
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.ast.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> CreateView {
        self.ast
    }
}
