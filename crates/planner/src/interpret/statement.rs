use model::transform::{ComparisonOperator, DerivedColumn, Filter, Join, NestedTransform};
use view_syntax::{
    ast::{expr::Expression, operator::BinaryOperator, view::StatementEntry},
    decompose,
    errors::DiagnosticKind,
};

use crate::interpret::{ViewInterpreter, describe, order::order_terms};

impl ViewInterpreter {
    pub(crate) fn resolve_statement(&mut self, statement: &StatementEntry) {
        let keyword = statement.keyword.name.to_ascii_lowercase();
        let expr = &statement.expression;

        match keyword.as_str() {
            "join" => self.resolve_join(expr),
            "where" => self.transform.filters.push(Filter {
                expression: decompose::name_chain(expr),
            }),
            "group_by" => {
                if let Some(tokens) = decompose::name_tokens(expr) {
                    self.transform
                        .group_by
                        .get_or_insert_with(Vec::new)
                        .extend(tokens);
                }
            }
            "order_by" => {
                let terms = order_terms(expr);
                if !terms.is_empty() {
                    self.transform
                        .order_by
                        .get_or_insert_with(Vec::new)
                        .extend(terms);
                }
            }
            "limit" => self.resolve_limit(expr),
            "using" => match decompose::single_name(expr) {
                Some(transform_name) => {
                    self.transform.nested_transform = Some(NestedTransform {
                        transform_name,
                        sources: Vec::new(),
                    });
                }
                None => self.report(
                    DiagnosticKind::InvalidName {
                        name: describe(expr),
                        hint: Some("use: using: other_view".to_string()),
                    },
                    expr.span,
                ),
            },
            "add" => self.resolve_derived_column(expr),
            // `pivot: a, b` arrives as one entry per list element, all
            // sharing the span of the written statement.
            _ => {
                if self.unknown_statements.insert(statement.span) {
                    self.report(
                        DiagnosticKind::UnexpectedToken {
                            expected: None,
                            found: statement.keyword.name.clone(),
                        },
                        statement.keyword.span,
                    );
                }
            }
        }
    }

    fn resolve_join(&mut self, expr: &Expression) {
        let join = expr.as_binary().and_then(|(left, operator, right)| {
            let operator = comparison(operator)?;
            let left = decompose::name_fragments(left)?;
            let right = decompose::name_fragments(right)?;
            match (left.as_slice(), right.as_slice()) {
                ([left_table, left_column], [right_table, right_column]) => Some(
                    Join::new(left_table, left_column, right_table, right_column)
                        .with_operator(operator),
                ),
                _ => None,
            }
        });

        match join {
            Some(join) => self.transform.joins.push(join),
            None => self.report(
                DiagnosticKind::InvalidName {
                    name: describe(expr),
                    hint: Some("use join: table.column = table.column".to_string()),
                },
                expr.span,
            ),
        }
    }

    fn resolve_limit(&mut self, expr: &Expression) {
        let token = decompose::single_name(expr);
        match token.as_deref().map(str::parse::<u64>) {
            Some(Ok(limit)) => self.transform.limit = Some(limit),
            _ => self.report(
                DiagnosticKind::InvalidName {
                    name: token.unwrap_or_else(|| describe(expr)),
                    hint: Some("limit takes a non-negative integer".to_string()),
                },
                expr.span,
            ),
        }
    }

    fn resolve_derived_column(&mut self, expr: &Expression) {
        let derived = expr.as_binary().and_then(|(left, operator, right)| {
            if operator != BinaryOperator::Equal {
                return None;
            }
            Some(DerivedColumn {
                name: decompose::single_name(left)?,
                expression: decompose::name_chain(right),
            })
        });

        match derived {
            Some(derived) => self
                .transform
                .derived_columns
                .get_or_insert_with(Vec::new)
                .push(derived),
            None => self.report(
                DiagnosticKind::InvalidName {
                    name: describe(expr),
                    hint: Some("use add: name = expression".to_string()),
                },
                expr.span,
            ),
        }
    }
}

fn comparison(operator: BinaryOperator) -> Option<ComparisonOperator> {
    let operator = match operator {
        BinaryOperator::Equal => ComparisonOperator::Eq,
        BinaryOperator::NotEqual => ComparisonOperator::NotEq,
        BinaryOperator::LessThan => ComparisonOperator::Lt,
        BinaryOperator::LessOrEqual => ComparisonOperator::LtEq,
        BinaryOperator::GreaterThan => ComparisonOperator::Gt,
        BinaryOperator::GreaterOrEqual => ComparisonOperator::GtEq,
        _ => return None,
    };
    Some(operator)
}
