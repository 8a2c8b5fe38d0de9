//! `CREATE OR REPLACE VIEW` statements.

use model::transform::{Source, Transform};
use tracing::debug;

use crate::{
    emit::EmitError,
    query::{
        ast::{common::TableRef, select::Relation},
        builder::{create_view::CreateViewBuilder, select::select_for_transform},
        dialect::SqlDialect,
        renderer::{Render, Renderer},
    },
};

/// Compiles one Transform into a view statement for `dialect`.
pub fn emit(transform: &Transform, dialect: SqlDialect) -> Result<String, EmitError> {
    let select = select_for_transform(transform, table_relation)?;
    let view = TableRef::new(transform.schema_name.as_deref(), &transform.name);

    let statement = CreateViewBuilder::new(view, select)
        .comment(format!(
            "{} view: {}",
            dialect.display_name(),
            transform.qualified_name()
        ))
        .build();

    let mut renderer = Renderer::new(dialect.quoting());
    statement.render(&mut renderer);

    debug!(
        "Emitted {} view '{}'",
        dialect.display_name(),
        transform.qualified_name()
    );
    Ok(renderer.finish())
}

/// Compiles every Transform, one statement per line group. The first
/// failure aborts the batch.
pub fn emit_all(transforms: &[Transform], dialect: SqlDialect) -> Result<String, EmitError> {
    let statements = transforms
        .iter()
        .map(|transform| emit(transform, dialect))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(statements.join("\n"))
}

fn table_relation(source: &Source) -> (Relation, Option<String>) {
    (
        Relation::Table(TableRef::new(source.schema_name.as_deref(), &source.name)),
        source.alias.clone(),
    )
}
