use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::transform::Transform;
use planner::{
    Session,
    emit::{artifact::ArtifactEmitter, sql},
    query::dialect::SqlDialect,
    settings::ArtifactSettings,
};
use std::{path::Path, str::FromStr};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "viewc",
    version = "0.1.0",
    about = "View definition compiler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so generated SQL on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sql {
            input,
            dialect,
            output,
            keep_going,
        } => {
            let dialect = SqlDialect::from_str(&dialect).map_err(CliError::InvalidDialect)?;
            let transforms = compile(&input, keep_going)?;
            let statements = sql::emit_all(&transforms, dialect)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{statements}\n"))?;
                    info!("Wrote {} statement(s) to {}", transforms.len(), path);
                }
                None => println!("{statements}"),
            }
        }
        Commands::Artifacts {
            input,
            out_dir,
            config,
            keep_going,
        } => {
            let settings = match config {
                Some(path) => ArtifactSettings::from_file(path)?,
                None => ArtifactSettings::default(),
            };
            let transforms = compile(&input, keep_going)?;
            let summary = ArtifactEmitter::new(settings).write(&transforms, Path::new(&out_dir))?;
            output::print_summary(&summary);
        }
        Commands::Ast { input } => {
            let transforms = compile(&input, true)?;
            let json = serde_json::to_string_pretty(&transforms)?;
            println!("{json}");
        }
        Commands::Check { input } => {
            let (_, errors) = load_session(&input)?;
            if errors > 0 {
                return Err(CliError::DiagnosticsFailed(errors));
            }
            info!("{} is valid", input);
        }
    }

    Ok(())
}

/// Parses, validates and interprets `path`, printing every diagnostic.
fn load_session(path: &str) -> Result<(Session, usize), CliError> {
    let source = std::fs::read_to_string(path)?;
    let document = view_syntax::parse(&source)?;

    let mut session = Session::new();
    let diagnostics = session.compile(&document);
    let errors = output::print_diagnostics(path, &diagnostics);
    Ok((session, errors))
}

fn compile(path: &str, keep_going: bool) -> Result<Vec<Transform>, CliError> {
    let (session, errors) = load_session(path)?;
    if errors > 0 {
        if !keep_going {
            return Err(CliError::DiagnosticsFailed(errors));
        }
        warn!("Continuing despite {} error diagnostic(s)", errors);
    }
    Ok(session.into_transforms())
}
