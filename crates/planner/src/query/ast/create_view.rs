use crate::query::ast::{common::TableRef, select::Select};

/// `CREATE OR REPLACE VIEW <view> AS <query>;` preceded by a comment line.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateView {
    pub comment: Option<String>,
    pub view: TableRef,
    pub query: Select,
}
