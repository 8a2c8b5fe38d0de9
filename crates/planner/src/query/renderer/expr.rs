use crate::query::{
    ast::{
        common::OrderDir,
        expr::{Comparison, Expr, FunctionCall, Ident, OrderByExpr, WindowSpec},
    },
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Raw(text) => r.sql.push_str(text),
            Expr::Wildcard => r.sql.push('*'),
            Expr::FunctionCall(call) => call.render(r),
            Expr::Window { call, over } => {
                call.render(r);
                r.sql.push_str(" OVER (");
                over.render(r);
                r.sql.push(')');
            }
            Expr::Comparison(comparison) => comparison.render(r),
            Expr::And(conditions) => r.render_list(conditions, " AND "),
            Expr::Alias { expr, alias } => {
                expr.render(r);
                r.sql.push_str(" AS ");
                r.push_identifier(alias);
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.push_identifier(qualifier);
            r.sql.push('.');
        }
        r.push_identifier(&self.name);
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        r.render_list(&self.args, ", ");
        r.sql.push(')');
    }
}

impl Render for WindowSpec {
    fn render(&self, r: &mut Renderer) {
        let mut needs_space = false;

        if !self.partition_by.is_empty() {
            r.sql.push_str("PARTITION BY ");
            r.render_list(&self.partition_by, ", ");
            needs_space = true;
        }

        if !self.order_by.is_empty() {
            if needs_space {
                r.sql.push(' ');
            }
            r.sql.push_str("ORDER BY ");
            r.render_list(&self.order_by, ", ");
            needs_space = true;
        }

        if let Some(frame) = &self.frame {
            if needs_space {
                r.sql.push(' ');
            }
            r.sql.push_str(frame);
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        r.sql.push_str(match self.direction {
            OrderDir::Asc => " ASC",
            OrderDir::Desc => " DESC",
        });
    }
}

impl Render for Comparison {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);
        r.sql.push(' ');
        r.sql.push_str(self.op);
        r.sql.push(' ');
        self.right.render(r);
    }
}
