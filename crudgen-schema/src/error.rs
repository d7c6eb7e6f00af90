use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for crudgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Coarse grouping used by the CLI to pick its guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration missing or the database could not be reached.
    Connection,
    /// The request itself is invalid (unknown table, empty code, ...).
    Validation,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(crudgen::config_missing),
        help("create a crudgen.toml with a [database] section, or pass --config <path>")
    )]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(crudgen::config_parse),
        help("the [database] section needs host, user and database")
    )]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable '{var}' is not set")]
    #[diagnostic(
        code(crudgen::missing_password),
        help("export {var} or set database.password in the config file")
    )]
    MissingPassword { var: String },

    #[error("failed to start the database runtime")]
    #[diagnostic(code(crudgen::runtime))]
    Runtime {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to connect to database '{database}' at {host}:{port}")]
    #[diagnostic(
        code(crudgen::connection),
        help(
            "check the [database] settings in the config file, network connectivity to the database server and the user's permissions"
        )
    )]
    Connection {
        host: String,
        port: u16,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("query failed while {context}")]
    #[diagnostic(
        code(crudgen::query),
        help("check that the user can read INFORMATION_SCHEMA and the code tables")
    )]
    Query {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("table '{name}' not found")]
    #[diagnostic(code(crudgen::table_not_found), help("{hint}"))]
    TableNotFound {
        name: String,
        suggestions: Vec<String>,
        hint: String,
    },

    #[error("no columns found for table '{table}'")]
    #[diagnostic(
        code(crudgen::no_columns),
        help("the table exists but INFORMATION_SCHEMA returned no columns for it")
    )]
    NoColumns { table: String },

    #[error("code '{code}' not found")]
    #[diagnostic(
        code(crudgen::code_not_found),
        help("run 'crudgen codes' to list the available codes")
    )]
    CodeNotFound { code: String },

    #[error("code '{code}' has no items")]
    #[diagnostic(
        code(crudgen::empty_code),
        help("add rows to code_item for '{code}' before generating an enum")
    )]
    EmptyCode { code: String },
}

impl Error {
    /// Create a table-not-found error with "did you mean" suggestions
    pub fn table_not_found(name: impl Into<String>, suggestions: Vec<String>) -> Box<Self> {
        let hint = if suggestions.is_empty() {
            "check the table name and the configured database".to_string()
        } else {
            let list: Vec<String> = suggestions.iter().map(|s| format!("  - {}", s)).collect();
            format!("did you mean one of these?\n{}", list.join("\n"))
        };
        Box::new(Error::TableNotFound {
            name: name.into(),
            suggestions,
            hint,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a query error, recording what was being fetched
    pub fn query(context: impl Into<String>, source: sqlx::Error) -> Box<Self> {
        Box::new(Error::Query {
            context: context.into(),
            source,
        })
    }

    /// The category the CLI reports this error under.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ConfigIo { .. }
            | Error::ConfigParse { .. }
            | Error::MissingPassword { .. }
            | Error::Runtime { .. }
            | Error::Connection { .. }
            | Error::Query { .. } => ErrorCategory::Connection,
            Error::TableNotFound { .. }
            | Error::NoColumns { .. }
            | Error::CodeNotFound { .. }
            | Error::EmptyCode { .. } => ErrorCategory::Validation,
        }
    }
}
