use serde::{Deserialize, Serialize};

/// Comparison in a join predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[default]
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::NotEq => "<>",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::LtEq => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::GtEq => ">=",
        }
    }
}

/// `left_table.left_column OP right_table.right_column`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    pub left_table: String,
    pub left_column: String,
    pub operator: ComparisonOperator,
    pub right_table: String,
    pub right_column: String,
}

impl Join {
    /// Equi-join between two qualified columns.
    pub fn new(
        left_table: impl Into<String>,
        left_column: impl Into<String>,
        right_table: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Join {
            left_table: left_table.into(),
            left_column: left_column.into(),
            operator: ComparisonOperator::default(),
            right_table: right_table.into(),
            right_column: right_column.into(),
        }
    }

    pub fn with_operator(mut self, operator: ComparisonOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn touches(&self, table: &str) -> bool {
        self.left_table == table || self.right_table == table
    }
}
