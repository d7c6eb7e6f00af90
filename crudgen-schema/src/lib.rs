// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration loading and MySQL schema introspection for crudgen.

mod codes;
mod config;
mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod mysql;
mod reader;
mod source;

pub use codes::CodeReader;
pub use config::{
    Config, ConfigFile, DEFAULT_CONFIG_FILE, DatabaseConfig, GeneratorConfig, OutputConfig,
};
pub use error::{Error, ErrorCategory, Result};
#[cfg(any(test, feature = "testing"))]
pub use memory::{InMemorySource, SourceCall};
pub use mysql::MySqlSource;
pub use reader::{SchemaReader, suggest_tables};
pub use source::{CodeSource, SchemaSource};
