use model::transform::{OrderTerm, SortDirection};
use view_syntax::{ast::expr::Expression, decompose};

/// Reads one `table.column [asc|desc]` term.
///
/// Anything that is not exactly a qualified column (after removing a
/// trailing direction) yields no terms. Comma lists arrive here already
/// split into separate statements; a bracketed list does not.
pub fn order_terms(expr: &Expression) -> Vec<OrderTerm> {
    let Some(mut fragments) = decompose::name_fragments(expr) else {
        return Vec::new();
    };

    let direction = match fragments.last().and_then(|last| SortDirection::parse(last)) {
        Some(direction) => {
            fragments.pop();
            direction
        }
        None => SortDirection::Asc,
    };

    match fragments.as_slice() {
        [table, column] => vec![OrderTerm::new(table, column, direction)],
        _ => Vec::new(),
    }
}
