use crate::query::{
    ast::create_view::CreateView,
    renderer::{Render, Renderer},
};

impl Render for CreateView {
    fn render(&self, r: &mut Renderer) {
        if let Some(comment) = &self.comment {
            r.sql.push_str("-- ");
            r.sql.push_str(comment);
            r.sql.push('\n');
        }
        r.sql.push_str("CREATE OR REPLACE VIEW ");
        r.render_table_ref(&self.view);
        r.sql.push_str(" AS\n");
        self.query.render(r);
        r.sql.push(';');
    }
}
