use model::transform::{
    Aggregation, Column, ColumnInput, ColumnKind, ColumnRef, OrderTerm, WindowFunction,
};
use view_syntax::{
    ast::{
        attribute::Attribute,
        expr::ExpressionKind,
        literal::Literal,
        view::ColumnEntry,
    },
    decompose,
    errors::DiagnosticKind,
};

use crate::interpret::{ViewInterpreter, describe, order::order_terms};

/// What the column head resolved to.
enum Head {
    Column(ColumnRef),
    Expression(String),
}

/// Function plus ordering metadata shared by `agg` and `window` settings.
struct FunctionSetting {
    function: String,
    partition_by: Vec<String>,
    order_by: Vec<OrderTerm>,
    frame: Option<String>,
}

impl ViewInterpreter {
    pub(crate) fn resolve_column(&mut self, entry: &ColumnEntry) {
        let Some(expr) = &entry.expression else {
            self.report(
                DiagnosticKind::InvalidColumn {
                    reason: "column entry has no expression".to_string(),
                },
                entry.span,
            );
            return;
        };

        let head = match decompose::name_fragments(expr) {
            Some(fragments) if fragments.len() == 2 => {
                Head::Column(ColumnRef::new(&fragments[0], &fragments[1]))
            }
            Some(fragments) if fragments.len() == 1 => Head::Column(ColumnRef::new("", &fragments[0])),
            Some(fragments) => Head::Expression(fragments.join(".")),
            None => Head::Expression(String::new()),
        };

        let attributes = entry.attributes.as_deref().unwrap_or_default();

        let alias = setting(attributes, "as").and_then(|attr| self.alias(attr));
        let aggregation = setting(attributes, "agg").and_then(|attr| self.function_setting(attr));
        let window = setting(attributes, "window").and_then(|attr| self.function_setting(attr));
        let expression_override = setting(attributes, "expr")
            .and_then(|attr| attr.value.as_ref())
            .map(decompose::name_chain);

        let input = match &head {
            Head::Column(column) => ColumnInput::Column(column.clone()),
            Head::Expression(text) => {
                ColumnInput::Expression(expression_override.clone().unwrap_or_else(|| text.clone()))
            }
        };

        let kind = if let Some(agg) = aggregation {
            ColumnKind::Aggregate(Aggregation {
                function: agg.function,
                input,
                partition_by: agg.partition_by,
                order_by: agg.order_by,
            })
        } else if let Some(window) = window {
            ColumnKind::Window(WindowFunction {
                function: window.function,
                input,
                partition_by: window.partition_by,
                order_by: window.order_by,
                frame: window.frame,
            })
        } else {
            match head {
                Head::Expression(text) => ColumnKind::Expression(expression_override.unwrap_or(text)),
                Head::Column(column) => ColumnKind::Plain(column),
            }
        };

        self.transform.columns.push(Column { kind, alias });
    }

    fn alias(&mut self, attr: &Attribute) -> Option<String> {
        let alias = attr.value.as_ref().and_then(decompose::single_name);
        if alias.is_none() {
            self.warn(
                DiagnosticKind::InvalidName {
                    name: attr.value.as_ref().map(describe).unwrap_or_default(),
                    hint: Some("an alias is a single name, e.g. as: total_spent".to_string()),
                },
                attr.span,
            );
        }
        alias
    }

    fn function_setting(&mut self, attr: &Attribute) -> Option<FunctionSetting> {
        let Some(function) = attr.value.as_ref().and_then(decompose::single_name) else {
            self.report(
                DiagnosticKind::InvalidName {
                    name: attr.value.as_ref().map(describe).unwrap_or_default(),
                    hint: Some(format!("'{}' takes a function name, e.g. {}: sum", attr.key, attr.key)),
                },
                attr.span,
            );
            return None;
        };

        let partition_by = attr
            .nested_setting("partition_by")
            .and_then(|nested| nested.value.as_ref())
            .and_then(decompose::name_tokens)
            .unwrap_or_default();

        let order_by = attr
            .nested_setting("order_by")
            .and_then(|nested| nested.value.as_ref())
            .map(order_terms)
            .unwrap_or_default();

        // Frames only mean something on window functions; the validator warns
        // when one is nested under `agg`.
        let frame = if attr.key.is("window") {
            attr.nested_setting("frame")
                .and_then(|nested| nested.value.as_ref())
                .map(|value| match &value.kind {
                    ExpressionKind::Literal(Literal::String(text)) => text.clone(),
                    _ => decompose::name_chain(value),
                })
                .filter(|frame| !frame.is_empty())
        } else {
            None
        };

        Some(FunctionSetting {
            function,
            partition_by,
            order_by,
            frame,
        })
    }
}

/// First occurrence of a setting; later duplicates are ignored.
fn setting<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|attr| attr.key.is(name))
}
