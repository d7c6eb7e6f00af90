//! Configuration types and parsing for crudgen.toml files.

mod file;

use std::{path::PathBuf, str::FromStr};

pub use file::ConfigFile;
use serde::Deserialize;

use crate::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

/// Root configuration for crudgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Connection parameters
    pub database: DatabaseConfig,

    /// Where generated files go
    #[serde(default)]
    pub output: OutputConfig,

    /// Placeholders and base types used in generated code
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Parse a config from a string, using `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

/// MySQL/MariaDB connection parameters
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub user: String,

    /// Plain password. Takes precedence over `password_env`.
    #[serde(default)]
    pub password: Option<String>,

    /// Environment variable holding the password
    #[serde(default)]
    pub password_env: Option<String>,

    pub database: String,

    #[serde(default = "default_charset")]
    pub charset: String,
}

fn default_port() -> u16 {
    3306
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

impl DatabaseConfig {
    /// Resolve the password from the config or the environment.
    ///
    /// No password configured at all means an empty password.
    pub fn resolve_password(&self) -> Result<String> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        match &self.password_env {
            Some(var) => std::env::var(var)
                .map_err(|_| Box::new(Error::MissingPassword { var: var.clone() })),
            None => Ok(String::new()),
        }
    }
}

/// Output location
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Literal tokens left in generated code for manual completion
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package prefix of the entity class in `resultType`
    pub package_placeholder: String,
    /// Mapper namespace and parameter types
    pub type_placeholder: String,
    /// Base class the entity extends
    pub audit_base_class: String,
    /// Import line target for the base class
    pub audit_base_import: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_placeholder: "CHANGE_THIS_PACKAGE".to_string(),
            type_placeholder: "FILL_THIS_TYPE".to_string(),
            audit_base_class: "AuditColumns".to_string(),
            audit_base_import: Some("CHANGE_THIS_PACKAGE.AuditColumns".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Config {
        content.parse().expect("Failed to parse config")
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            r#"
            [database]
            host = "localhost"
            user = "app"
            database = "shop"
            "#,
        );

        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.charset, "utf8mb4");
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.generator.type_placeholder, "FILL_THIS_TYPE");
        assert_eq!(config.generator.audit_base_class, "AuditColumns");
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
            [database]
            host = "db.internal"
            port = 3307
            user = "app"
            password = "secret"
            database = "shop"
            charset = "utf8"

            [output]
            dir = "generated"

            [generator]
            package_placeholder = "com.example.shop"
            audit_base_class = "BaseEntity"
            audit_base_import = "com.example.common.BaseEntity"
            "#,
        );

        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.resolve_password().unwrap(), "secret");
        assert_eq!(config.output.dir, PathBuf::from("generated"));
        assert_eq!(config.generator.package_placeholder, "com.example.shop");
        // unset generator keys keep their defaults
        assert_eq!(config.generator.type_placeholder, "FILL_THIS_TYPE");
        assert_eq!(
            config.generator.audit_base_import.as_deref(),
            Some("com.example.common.BaseEntity")
        );
    }

    #[test]
    fn test_missing_database_section() {
        let err = "[output]\ndir = \"x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_password_from_missing_env() {
        let config = parse(
            r#"
            [database]
            host = "localhost"
            user = "app"
            database = "shop"
            password_env = "CRUDGEN_TEST_PASSWORD_THAT_IS_NEVER_SET"
            "#,
        );

        let err = config.database.resolve_password().unwrap_err();
        assert!(matches!(*err, Error::MissingPassword { .. }));
    }

    #[test]
    fn test_no_password_is_empty() {
        let config = parse(
            r#"
            [database]
            host = "localhost"
            user = "app"
            database = "shop"
            "#,
        );

        assert_eq!(config.database.resolve_password().unwrap(), "");
    }
}
