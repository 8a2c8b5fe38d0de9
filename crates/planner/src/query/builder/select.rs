//! Builds `Select` ASTs, either clause by clause or from a whole Transform.
//!
//! Both emitters share [`select_for_transform`]; they differ only in how a
//! source becomes a FROM/JOIN relation and in the dialect used to render.

use model::transform::{
    Aggregation, Column, ColumnInput, ColumnKind, ColumnRef, OrderTerm, Source, SortDirection,
    Transform, WindowFunction,
};

use crate::{
    emit::EmitError,
    query::ast::{
        common::{JoinKind, OrderDir},
        expr::{Comparison, Expr, FunctionCall, Ident, OrderByExpr, WindowSpec},
        select::{FromClause, JoinClause, Relation, Select},
    },
};

/// Window functions that never take an argument.
const RANKING_FUNCTIONS: [&str; 5] = [
    "ROW_NUMBER",
    "RANK",
    "DENSE_RANK",
    "PERCENT_RANK",
    "CUME_DIST",
];

#[derive(Debug, Default, Clone)]
pub struct SelectBuilder {
    ast: Select,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: Vec<Expr>) -> Self {
        self.ast.columns = columns;
        self
    }

    pub fn from(mut self, relation: Relation, alias: Option<&str>) -> Self {
        self.ast.from = Some(FromClause {
            relation,
            alias: alias.map(String::from),
        });
        self
    }

    pub fn join(
        mut self,
        kind: JoinKind,
        relation: Relation,
        alias: Option<&str>,
        on: Option<Expr>,
    ) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            relation,
            alias: alias.map(String::from),
            on,
        });
        self
    }

    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn group_by(mut self, expr: Expr) -> Self {
        self.ast.group_by.push(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

/// Builds the SELECT for `transform`.
///
/// `relation` turns each source into the relation and alias rendered in
/// FROM/JOIN. Fails when the transform has no sources.
pub fn select_for_transform<F>(transform: &Transform, relation: F) -> Result<Select, EmitError>
where
    F: Fn(&Source) -> (Relation, Option<String>),
{
    let Some((first, rest)) = transform.sources.split_first() else {
        return Err(EmitError::NoSources {
            view: transform.qualified_name(),
        });
    };

    let columns = if transform.columns.is_empty() {
        vec![Expr::Wildcard]
    } else {
        transform.columns.iter().map(column_expr).collect()
    };

    let (from, from_alias) = relation(first);
    let mut builder = SelectBuilder::new()
        .columns(columns)
        .from(from, from_alias.as_deref());

    for source in rest {
        let conditions: Vec<Expr> = transform
            .joins_for(source.reference_name())
            .map(|join| {
                Expr::Comparison(Box::new(Comparison {
                    left: qualified(&join.left_table, &join.left_column),
                    op: join.operator.as_sql(),
                    right: qualified(&join.right_table, &join.right_column),
                }))
            })
            .collect();

        let (target, alias) = relation(source);
        builder = if conditions.is_empty() {
            builder.join(JoinKind::Cross, target, alias.as_deref(), None)
        } else {
            builder.join(
                JoinKind::Inner,
                target,
                alias.as_deref(),
                Some(and(conditions)),
            )
        };
    }

    let filters: Vec<Expr> = transform
        .filters
        .iter()
        .filter(|filter| !filter.expression.is_empty())
        .map(|filter| Expr::Raw(filter.expression.clone()))
        .collect();
    if !filters.is_empty() {
        builder = builder.where_clause(and(filters));
    }

    for token in transform.group_by.iter().flatten() {
        let expr = match token.split_once('.') {
            Some((table, column)) => qualified(table, column),
            None => unqualified(token),
        };
        builder = builder.group_by(expr);
    }

    for term in transform.order_by.iter().flatten() {
        builder = builder.order_by(qualified(&term.table, &term.column), order_dir(term.direction));
    }

    if let Some(limit) = transform.limit {
        builder = builder.limit(limit);
    }

    Ok(builder.build())
}

fn column_expr(column: &Column) -> Expr {
    let expr = match &column.kind {
        ColumnKind::Plain(column) => column_ref(column),
        ColumnKind::Expression(text) => Expr::Raw(text.clone()),
        ColumnKind::Aggregate(agg) => aggregate_expr(agg),
        ColumnKind::Window(window) => window_expr(window),
    };

    match &column.alias {
        Some(alias) => Expr::Alias {
            expr: Box::new(expr),
            alias: alias.clone(),
        },
        None => expr,
    }
}

fn aggregate_expr(agg: &Aggregation) -> Expr {
    let call = FunctionCall {
        name: agg.function.to_uppercase(),
        args: vec![input_expr(&agg.input)],
    };

    if agg.is_windowed() {
        Expr::Window {
            call,
            over: window_spec(&agg.partition_by, &agg.order_by, None),
        }
    } else {
        Expr::FunctionCall(call)
    }
}

fn window_expr(window: &WindowFunction) -> Expr {
    let name = window.function.to_uppercase();
    let args = if RANKING_FUNCTIONS.contains(&name.as_str()) {
        Vec::new()
    } else {
        vec![input_expr(&window.input)]
    };

    Expr::Window {
        call: FunctionCall { name, args },
        over: window_spec(&window.partition_by, &window.order_by, window.frame.as_deref()),
    }
}

/// Partition tokens are kept whole: `customers.id` is one identifier.
fn window_spec(partition_by: &[String], order_by: &[OrderTerm], frame: Option<&str>) -> WindowSpec {
    WindowSpec {
        partition_by: partition_by.iter().map(|token| unqualified(token)).collect(),
        order_by: order_by
            .iter()
            .map(|term| OrderByExpr {
                expr: qualified(&term.table, &term.column),
                direction: order_dir(term.direction),
            })
            .collect(),
        frame: frame.map(String::from),
    }
}

fn input_expr(input: &ColumnInput) -> Expr {
    match input {
        ColumnInput::Column(column) => column_ref(column),
        ColumnInput::Expression(text) if text.is_empty() => Expr::Wildcard,
        ColumnInput::Expression(text) => Expr::Raw(text.clone()),
    }
}

fn column_ref(column: &ColumnRef) -> Expr {
    if column.is_qualified() {
        qualified(&column.table, &column.column)
    } else {
        unqualified(&column.column)
    }
}

fn qualified(table: &str, column: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(table.to_string()),
        name: column.to_string(),
    })
}

fn unqualified(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

fn and(mut conditions: Vec<Expr>) -> Expr {
    if conditions.len() == 1 {
        conditions.remove(0)
    } else {
        Expr::And(conditions)
    }
}

fn order_dir(direction: SortDirection) -> OrderDir {
    match direction {
        SortDirection::Asc => OrderDir::Asc,
        SortDirection::Desc => OrderDir::Desc,
    }
}
