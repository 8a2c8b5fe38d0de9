use crate::query::{
    ast::{
        common::JoinKind,
        select::{FromClause, JoinClause, Relation, Select},
    },
    renderer::{Render, Renderer},
};

/// Clauses go one per line.
impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        r.render_list(&self.columns, ", ");

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push('\n');
            from.render(r);
        }

        // 3. JOIN
        for join in &self.joins {
            r.sql.push('\n');
            join.render(r);
        }

        // 4. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str("\nWHERE ");
            where_clause.render(r);
        }

        // 5. GROUP BY
        if !self.group_by.is_empty() {
            r.sql.push_str("\nGROUP BY ");
            r.render_list(&self.group_by, ", ");
        }

        // 6. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str("\nORDER BY ");
            r.render_list(&self.order_by, ", ");
        }

        // 7. LIMIT
        if let Some(limit) = self.limit {
            r.sql.push_str(&format!("\nLIMIT {limit}"));
        }
    }
}

impl Render for Relation {
    fn render(&self, r: &mut Renderer) {
        match self {
            Relation::Table(table) => r.render_table_ref(table),
            Relation::Raw(text) => r.sql.push_str(text),
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        self.relation.render(r);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.push_identifier(alias);
        }
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        let join_str = match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        };
        r.sql.push_str(&format!("{join_str} "));
        self.relation.render(r);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.push_identifier(alias);
        }
        if let Some(on) = &self.on {
            r.sql.push_str(" ON ");
            on.render(r);
        }
    }
}
