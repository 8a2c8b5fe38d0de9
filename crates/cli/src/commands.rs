use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile view definitions into CREATE OR REPLACE VIEW statements
    Sql {
        #[arg(long, help = "View definition file path")]
        input: String,

        /// Target dialect: "postgres", "mysql", "sqlite", "sqlserver", "snowflake"
        #[arg(long, default_value = "postgres")]
        dialect: String,

        #[arg(
            long,
            help = "If specified, writes the SQL to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(
            long,
            help = "Emit even when error diagnostics were reported"
        )]
        keep_going: bool,
    },
    /// Write model files and a manifest for a dbt-style project
    Artifacts {
        #[arg(long, help = "View definition file path")]
        input: String,

        #[arg(long, help = "Directory receiving the model files")]
        out_dir: String,

        #[arg(long, help = "Artifact settings file (TOML)")]
        config: Option<String>,

        #[arg(
            long,
            help = "Write even when error diagnostics were reported"
        )]
        keep_going: bool,
    },
    /// Print the interpreted transforms as JSON
    Ast {
        #[arg(long, help = "View definition file path")]
        input: String,
    },
    /// Report diagnostics without emitting anything
    Check {
        #[arg(long, help = "View definition file path")]
        input: String,
    },
}
