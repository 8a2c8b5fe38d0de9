use crate::ast::span::Span;
use heck::ToSnakeCase;
use std::collections::HashMap;

/// Name-uniqueness registry shared by every declaration of a compilation.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    views: HashMap<String, Span>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            views: HashMap::new(),
        }
    }

    /// Registers `name`, returning the span of the earlier declaration when
    /// the normalized name is already taken. The first registration wins.
    pub fn register_view(&mut self, name: &str, span: Span) -> Option<Span> {
        let key = table_key(name);
        match self.views.get(&key) {
            Some(first) => Some(*first),
            None => {
                self.views.insert(key, span);
                None
            }
        }
    }

    pub fn contains_view(&self, name: &str) -> bool {
        self.views.contains_key(&table_key(name))
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}

/// Case- and shape-normalized key, e.g. `Analytics.OrderSummary` ->
/// `analytics.order_summary`.
pub fn table_key(name: &str) -> String {
    name.split('.')
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join(".")
}
