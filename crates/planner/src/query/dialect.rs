//! Defines the `Dialect` trait for identifier quoting and the dialect tags
//! accepted on the command line.

use std::{fmt, str::FromStr};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) for the target.
    ///
    /// - ANSI uses double quotes, doubling embedded quotes: `"my""column"`
    /// - Bare leaves the identifier untouched: `my_column`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the name of the quoting style (e.g., "ANSI").
    fn name(&self) -> String;
}

/// Double-quoted identifiers. Embedded `"` are doubled so an identifier can
/// never terminate its own quoting.
#[derive(Debug, Clone)]
pub struct Ansi;

impl Dialect for Ansi {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn name(&self) -> String {
        "ANSI".into()
    }
}

/// Unquoted identifiers, used by the build-artifact emitter.
#[derive(Debug, Clone)]
pub struct Bare;

impl Dialect for Bare {
    fn quote_identifier(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn name(&self) -> String {
        "Bare".into()
    }
}

/// Target database for view statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SqlDialect {
    #[default]
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
    Snowflake,
}

impl SqlDialect {
    pub fn display_name(&self) -> &'static str {
        match self {
            SqlDialect::Postgres => "PostgreSQL",
            SqlDialect::MySql => "MySQL",
            SqlDialect::Sqlite => "SQLite",
            SqlDialect::SqlServer => "SQL Server",
            SqlDialect::Snowflake => "Snowflake",
        }
    }

    /// Identifier quoting for this dialect. Every dialect currently shares
    /// ANSI quoting, MySQL included.
    pub fn quoting(&self) -> &'static dyn Dialect {
        &Ansi
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            "mysql" | "mariadb" => Ok(SqlDialect::MySql),
            "sqlite" => Ok(SqlDialect::Sqlite),
            "mssql" | "sqlserver" => Ok(SqlDialect::SqlServer),
            "snowflake" => Ok(SqlDialect::Snowflake),
            other => Err(format!("Unknown SQL dialect: {other}")),
        }
    }
}
