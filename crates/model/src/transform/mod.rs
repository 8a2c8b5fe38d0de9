use serde::{Deserialize, Serialize};

pub mod column;
pub mod join;
pub mod order;
pub mod source;

pub use column::{Aggregation, Column, ColumnInput, ColumnKind, ColumnRef, WindowFunction};
pub use join::{ComparisonOperator, Join};
pub use order::{OrderTerm, SortDirection};
pub use source::Source;

/// One named logical view.
///
/// Sources keep declaration order, which is also the default join order.
/// A Transform with no sources is representable but cannot be emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,
    pub schema_name: Option<String>,
    pub sources: Vec<Source>,
    pub columns: Vec<Column>,
    pub joins: Vec<Join>,
    /// AND-combined.
    pub filters: Vec<Filter>,
    /// Raw name tokens, dotted (`orders.status`) or bare (`region`).
    pub group_by: Option<Vec<String>>,
    pub order_by: Option<Vec<OrderTerm>>,
    pub limit: Option<u64>,
    pub derived_columns: Option<Vec<DerivedColumn>>,
    pub nested_transform: Option<NestedTransform>,
}

impl Transform {
    pub fn new(name: impl Into<String>) -> Self {
        Transform {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `schema.name`, or just `name` when unqualified.
    pub fn qualified_name(&self) -> String {
        match &self.schema_name {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }

    /// Joins whose left or right side names `source`.
    pub fn joins_for<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Join> + 'a {
        self.joins.iter().filter(move |join| join.touches(source))
    }
}

/// Opaque boolean expression text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub expression: String,
}

/// `add: name = expr`. Carried in the representation but not emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedColumn {
    pub name: String,
    pub expression: String,
}

/// `using: other_view`. Carried in the representation but not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedTransform {
    pub transform_name: String,
    pub sources: Vec<Source>,
}
