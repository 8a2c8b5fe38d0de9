//! Build artifacts: one model file per Transform plus a shared
//! documentation manifest.
//!
//! Writes are not atomic. Callers must not run two writers against the same
//! directory at once.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use heck::ToSnakeCase;
use model::transform::{Column, ColumnKind, Source, Transform};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    emit::EmitError,
    query::{
        ast::select::Relation,
        builder::select::select_for_transform,
        dialect::Bare,
        renderer::{Render, Renderer},
    },
    settings::ArtifactSettings,
};

/// Result of a [`ArtifactEmitter::write`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Number of model files written.
    pub count: usize,
    pub directory: PathBuf,
    /// Every file written, manifest last.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub version: u32,
    pub models: Vec<ModelDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDoc {
    pub name: String,
    pub description: String,
    pub columns: Vec<ColumnDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDoc {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ArtifactEmitter {
    settings: ArtifactSettings,
}

impl ArtifactEmitter {
    pub fn new(settings: ArtifactSettings) -> Self {
        ArtifactEmitter { settings }
    }

    /// Snake-cased qualified name, e.g. `sales.OrderSummary` ->
    /// `sales_order_summary`.
    pub fn model_name(transform: &Transform) -> String {
        match &transform.schema_name {
            Some(schema) => format!(
                "{}_{}",
                schema.to_snake_case(),
                transform.name.to_snake_case()
            ),
            None => transform.name.to_snake_case(),
        }
    }

    pub fn model_file_name(transform: &Transform) -> String {
        format!("{}.sql", Self::model_name(transform))
    }

    /// Config header followed by the SELECT, with bare identifiers and every
    /// source read through the source template.
    pub fn render_model(&self, transform: &Transform) -> Result<String, EmitError> {
        let select = select_for_transform(transform, |source| self.source_relation(source))?;

        let mut renderer = Renderer::new(&Bare);
        select.render(&mut renderer);

        Ok(format!(
            "{{{{ config(materialized='{}') }}}}\n\n{}\n",
            self.settings.materialized,
            renderer.finish()
        ))
    }

    fn source_relation(&self, source: &Source) -> (Relation, Option<String>) {
        let reference = self.settings.source_reference(&source.name.to_snake_case());
        (
            Relation::Raw(reference),
            Some(source.reference_name().to_string()),
        )
    }

    pub fn manifest(&self, transforms: &[Transform]) -> Manifest {
        Manifest {
            version: 2,
            models: transforms.iter().map(model_doc).collect(),
        }
    }

    pub fn render_manifest(&self, transforms: &[Transform]) -> Result<String, EmitError> {
        Ok(serde_yaml::to_string(&self.manifest(transforms))?)
    }

    /// Writes every model file, then the manifest, into `directory`.
    ///
    /// Zero transforms write nothing. Two transforms sharing a model name
    /// fail before anything is written. A transform without sources aborts
    /// the batch; files already written stay in place.
    pub fn write(
        &self,
        transforms: &[Transform],
        directory: &Path,
    ) -> Result<WriteSummary, EmitError> {
        let mut summary = WriteSummary {
            count: 0,
            directory: directory.to_path_buf(),
            files: Vec::new(),
        };

        if transforms.is_empty() {
            debug!("No transforms to write");
            return Ok(summary);
        }

        check_model_names(transforms)?;

        fs::create_dir_all(directory).map_err(|source| EmitError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        for transform in transforms {
            let contents = self.render_model(transform)?;
            let path = directory.join(Self::model_file_name(transform));
            write_file(&path, &contents)?;
            debug!("Wrote model '{}' to {}", transform.name, path.display());
            summary.files.push(path);
            summary.count += 1;
        }

        let path = directory.join(&self.settings.manifest_file);
        write_file(&path, &self.render_manifest(transforms)?)?;
        summary.files.push(path);

        info!(
            "Wrote {} model(s) to {}",
            summary.count,
            summary.directory.display()
        );
        Ok(summary)
    }
}

/// Writes artifacts with default settings.
pub fn write(transforms: &[Transform], directory: &Path) -> Result<WriteSummary, EmitError> {
    ArtifactEmitter::default().write(transforms, directory)
}

fn check_model_names(transforms: &[Transform]) -> Result<(), EmitError> {
    let mut seen = HashSet::new();
    for transform in transforms {
        let name = ArtifactEmitter::model_name(transform);
        if !seen.insert(name.clone()) {
            return Err(EmitError::DuplicateModel {
                name,
                view: transform.qualified_name(),
            });
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    fs::write(path, contents).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn model_doc(transform: &Transform) -> ModelDoc {
    let sources = transform
        .sources
        .iter()
        .map(|source| source.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    ModelDoc {
        name: ArtifactEmitter::model_name(transform),
        description: format!("View {} built from {}", transform.qualified_name(), sources),
        columns: transform.columns.iter().map(column_doc).collect(),
    }
}

fn column_doc(column: &Column) -> ColumnDoc {
    let description = match &column.kind {
        ColumnKind::Aggregate(agg) => {
            format!("{} aggregation of {}", agg.function, input_text(&agg.input.to_string()))
        }
        ColumnKind::Window(window) => format!(
            "{} window function over {}",
            window.function,
            input_text(&window.input.to_string())
        ),
        ColumnKind::Plain(column) => format!("Column from {}", column),
        ColumnKind::Expression(text) => format!("Column from {}", input_text(text)),
    };

    ColumnDoc {
        name: column.output_name().unwrap_or("unknown").to_string(),
        description,
    }
}

fn input_text(text: &str) -> &str {
    if text.is_empty() { "*" } else { text }
}
