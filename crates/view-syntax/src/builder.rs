use crate::{
    ast::{
        attribute::Attribute,
        doc::ViewDocument,
        dotpath::DotPath,
        expr::{Expression, ExpressionKind},
        ident::Identifier,
        literal::Literal,
        operator::{BinaryOperator, UnaryOperator},
        span::Span,
        view::{BodyEntry, ColumnEntry, StatementEntry, ViewDeclaration},
    },
    errors::BuildError,
    parser::{Rule, ViewParser},
};
use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use tracing::debug;

pub type BuildResult<T> = Result<T, BuildError>;

/// Parse view definition text into a typed AST
pub fn parse(input: &str) -> BuildResult<ViewDocument> {
    let pairs = ViewParser::parse(Rule::program, input).map_err(BuildError::from_pest_error)?;

    let document = build_document(pairs)?;
    debug!("Parsed {} view declaration(s)", document.views.len());
    Ok(document)
}

fn build_document(mut pairs: Pairs<Rule>) -> BuildResult<ViewDocument> {
    let program = pairs.next().ok_or_else(|| BuildError {
        message: "Empty input".to_string(),
        line: 1,
        column: 1,
    })?;

    let span = pair_to_span(&program);
    let mut views = Vec::new();

    for pair in program.into_inner() {
        match pair.as_rule() {
            Rule::view_decl => views.push(build_view_declaration(pair)?),
            Rule::EOI => {}
            _ => {}
        }
    }

    Ok(ViewDocument { views, span })
}

fn pair_to_span(pair: &Pair<Rule>) -> Span {
    let (line, col) = pair.line_col();
    let span_pest = pair.as_span();
    Span::new(span_pest.start(), span_pest.end(), line, col)
}

fn build_view_declaration(pair: Pair<Rule>) -> BuildResult<ViewDeclaration> {
    let span = pair_to_span(&pair);
    let mut name = None;
    let mut sources = None;
    let mut body = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::decl_name => {
                let name_pair = first_inner(inner)?;
                name = Some(build_primary_inner(name_pair)?);
            }
            Rule::source_clause => {
                sources = Some(build_source_clause(inner)?);
            }
            Rule::view_body => {
                body = build_view_body(inner)?;
            }
            _ => {} // kw_view
        }
    }

    let name = name.ok_or_else(|| BuildError::at("View declaration is missing a name", span))?;

    Ok(ViewDeclaration {
        name,
        sources,
        body,
        span,
    })
}

fn build_source_clause(pair: Pair<Rule>) -> BuildResult<Vec<Expression>> {
    let mut sources = Vec::new();

    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::source_list {
            for source in inner.into_inner() {
                if source.as_rule() == Rule::expression {
                    sources.push(build_expression(source)?);
                }
            }
        }
    }

    Ok(sources)
}

fn build_view_body(pair: Pair<Rule>) -> BuildResult<Vec<BodyEntry>> {
    let mut entries = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::statement_entry => {
                entries.extend(
                    build_statement_entries(inner)?
                        .into_iter()
                        .map(BodyEntry::Statement),
                );
            }
            Rule::column_entry => {
                entries.push(BodyEntry::Column(build_column_entry(inner)?));
            }
            _ => {}
        }
    }

    Ok(entries)
}

/// `keyword: a, b` becomes one statement per comma-separated expression.
fn build_statement_entries(pair: Pair<Rule>) -> BuildResult<Vec<StatementEntry>> {
    let span = pair_to_span(&pair);
    let mut keyword = Identifier::new("", span);
    let mut statements = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::ident => {
                keyword = Identifier::new(inner.as_str(), pair_to_span(&inner));
            }
            Rule::expression => {
                statements.push(StatementEntry {
                    keyword: keyword.clone(),
                    expression: build_expression(inner)?,
                    span,
                });
            }
            _ => {}
        }
    }

    Ok(statements)
}

fn build_column_entry(pair: Pair<Rule>) -> BuildResult<ColumnEntry> {
    let span = pair_to_span(&pair);
    let mut expression = None;
    let mut attributes = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::expression => {
                expression = Some(build_expression(inner)?);
            }
            Rule::attribute_list => {
                attributes = Some(build_attribute_list(inner)?);
            }
            _ => {}
        }
    }

    Ok(ColumnEntry {
        expression,
        attributes,
        span,
    })
}

fn build_attribute_list(pair: Pair<Rule>) -> BuildResult<Vec<Attribute>> {
    pair.into_inner()
        .filter(|inner| inner.as_rule() == Rule::attribute)
        .map(build_attribute)
        .collect()
}

fn build_attribute(pair: Pair<Rule>) -> BuildResult<Attribute> {
    let span = pair_to_span(&pair);
    let mut key = Identifier::new("", span);
    let mut value = None;
    let mut nested = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::ident => {
                key = Identifier::new(inner.as_str(), pair_to_span(&inner));
            }
            Rule::expression => {
                value = Some(build_expression(inner)?);
            }
            Rule::nested_attributes => {
                nested = build_attribute_list(inner)?;
            }
            _ => {}
        }
    }

    Ok(Attribute {
        key,
        value,
        nested,
        span,
    })
}

fn build_expression(pair: Pair<Rule>) -> BuildResult<Expression> {
    match pair.as_rule() {
        Rule::expression | Rule::primary => {
            let inner = first_inner(pair)?;
            match inner.as_rule() {
                // `( expression )` inside a primary
                Rule::expression => {
                    let span = pair_to_span(&inner);
                    let grouped = build_expression(inner)?;
                    Ok(Expression::new(
                        ExpressionKind::Grouped(Box::new(grouped)),
                        span,
                    ))
                }
                _ => build_expression(inner),
            }
        }
        Rule::logical_or
        | Rule::logical_and
        | Rule::comparison
        | Rule::additive
        | Rule::multiplicative => build_binary_chain(pair),
        Rule::unary => build_unary(pair),
        Rule::ordered => build_ordered(pair),
        _ => build_primary_inner(pair),
    }
}

fn build_binary_chain(pair: Pair<Rule>) -> BuildResult<Expression> {
    let span = pair_to_span(&pair);
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| BuildError::at("Empty expression", span))?;
    let mut expr = build_expression(first)?;

    while let Some(op_pair) = inner.next() {
        let operator = BinaryOperator::from_symbol(op_pair.as_str()).ok_or_else(|| {
            BuildError::at(
                format!("Unknown operator: {}", op_pair.as_str()),
                pair_to_span(&op_pair),
            )
        })?;
        let right_pair = inner
            .next()
            .ok_or_else(|| BuildError::at("Missing right-hand operand", span))?;
        let right = build_expression(right_pair)?;

        let joined = Span::new(
            expr.span.start,
            right.span.end,
            expr.span.line,
            expr.span.column,
        );
        expr = Expression::new(
            ExpressionKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            },
            joined,
        );
    }

    Ok(expr)
}

fn build_unary(pair: Pair<Rule>) -> BuildResult<Expression> {
    let span = pair_to_span(&pair);
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| BuildError::at("Empty expression", span))?;

    let operator = match first.as_rule() {
        Rule::op_not => UnaryOperator::Not,
        Rule::op_neg => UnaryOperator::Negate,
        _ => return build_expression(first),
    };

    let operand = inner
        .next()
        .ok_or_else(|| BuildError::at("Missing operand", span))?;

    Ok(Expression::new(
        ExpressionKind::Unary {
            operator,
            operand: Box::new(build_expression(operand)?),
        },
        span,
    ))
}

fn build_ordered(pair: Pair<Rule>) -> BuildResult<Expression> {
    let span = pair_to_span(&pair);
    let mut inner = pair.into_inner();
    let term_pair = inner
        .next()
        .ok_or_else(|| BuildError::at("Empty expression", span))?;
    let term = build_expression(term_pair)?;

    match inner.next() {
        Some(direction) => {
            let direction =
                Expression::identifier(direction.as_str(), pair_to_span(&direction));
            Ok(Expression::new(
                ExpressionKind::Sequence(vec![term, direction]),
                span,
            ))
        }
        None => Ok(term),
    }
}

fn build_primary_inner(pair: Pair<Rule>) -> BuildResult<Expression> {
    let span = pair_to_span(&pair);

    match pair.as_rule() {
        Rule::lit_number => Ok(Expression::new(
            ExpressionKind::Literal(Literal::Number(pair.as_str().to_string())),
            span,
        )),
        Rule::lit_string => {
            let s = parse_string_literal(pair.as_str());
            Ok(Expression::new(
                ExpressionKind::Literal(Literal::String(s)),
                span,
            ))
        }
        Rule::lit_boolean => {
            let b = pair.as_str() == "true";
            Ok(Expression::new(
                ExpressionKind::Literal(Literal::Boolean(b)),
                span,
            ))
        }
        Rule::lit_null => Ok(Expression::new(
            ExpressionKind::Literal(Literal::Null),
            span,
        )),
        Rule::ident => Ok(Expression::identifier(pair.as_str(), span)),
        Rule::dotted_ident => {
            // dotted_ident is atomic, so split the text manually
            Ok(Expression::new(
                ExpressionKind::DotNotation(DotPath::from_string(pair.as_str(), span)),
                span,
            ))
        }
        Rule::fn_call => build_function_call(pair),
        Rule::array_literal => {
            let elements = pair
                .into_inner()
                .filter(|inner| inner.as_rule() == Rule::expression)
                .map(build_expression)
                .collect::<BuildResult<Vec<_>>>()?;
            Ok(Expression::new(ExpressionKind::Array(elements), span))
        }
        rule => Err(BuildError::at(
            format!("Unexpected primary expression: {:?}", rule),
            span,
        )),
    }
}

fn build_function_call(pair: Pair<Rule>) -> BuildResult<Expression> {
    let span = pair_to_span(&pair);
    let mut name = String::new();
    let mut arguments = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::ident => {
                name = inner.as_str().to_string();
            }
            Rule::expression => {
                arguments.push(build_expression(inner)?);
            }
            _ => {}
        }
    }

    Ok(Expression::new(
        ExpressionKind::FunctionCall { name, arguments },
        span,
    ))
}

fn first_inner(pair: Pair<Rule>) -> BuildResult<Pair<Rule>> {
    let span = pair_to_span(&pair);
    let rule = pair.as_rule();
    pair.into_inner()
        .next()
        .ok_or_else(|| BuildError::at(format!("Empty {:?}", rule), span))
}

fn parse_string_literal(s: &str) -> String {
    // Remove the surrounding quotes (either style) and unescape
    let content = if s.len() >= 2 { &s[1..s.len() - 1] } else { s };
    content
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace("\\\\", "\\")
}
