mod codes;
mod completions;
mod describe;
mod enums;
mod generate;
mod ping;

use clap::{Parser, Subcommand};
use codes::CodesCommand;
use completions::CompletionsCommand;
use crudgen_codegen::GeneratorOptions;
use crudgen_schema::{DatabaseConfig, ErrorCategory, GeneratorConfig, MySqlSource};
use describe::DescribeCommand;
use enums::EnumCommand;
use eyre::Result;
use generate::GenerateCommand;
use ping::PingCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let heading = match e.category() {
                    ErrorCategory::Connection => {
                        "error: could not load the configuration or reach the database"
                    }
                    ErrorCategory::Validation => "error: the request could not be completed",
                };
                eprintln!("{}", heading);
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open one connection, run `f` against it and close it again.
///
/// The connection is closed even when `f` fails; a failure to close is
/// only logged.
pub(crate) fn with_connection<T>(
    config: &DatabaseConfig,
    f: impl FnOnce(&mut MySqlSource) -> crudgen_schema::Result<T>,
) -> crudgen_schema::Result<T> {
    let mut source = MySqlSource::connect(config)?;
    let result = f(&mut source);
    if let Err(e) = source.close() {
        log::warn!("{}", e);
    }
    result
}

pub(crate) fn generator_options(config: &GeneratorConfig) -> GeneratorOptions {
    GeneratorOptions {
        package_placeholder: config.package_placeholder.clone(),
        type_placeholder: config.type_placeholder.clone(),
        audit_base_class: config.audit_base_class.clone(),
        audit_base_import: config.audit_base_import.clone(),
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate MyBatis mapper XML, mapper interfaces and entities from a MySQL schema")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Describe(cmd)) => cmd.run(),
            Some(Commands::Enum(cmd)) => cmd.run(),
            Some(Commands::Codes(cmd)) => cmd.run(),
            Some(Commands::Ping(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved metadata of a table
    Describe(DescribeCommand),

    /// Generate Java enums from the code table
    Enum(EnumCommand),

    /// List the code table
    Codes(CodesCommand),

    /// Check the database connection
    Ping(PingCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_table_is_positional() {
        let cli = Cli::try_parse_from(["crudgen", "app_push", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.table.as_deref(), Some("app_push"));
        assert!(cli.generate.dry_run);
    }

    #[test]
    fn test_subcommand_wins_over_table() {
        let cli = Cli::try_parse_from(["crudgen", "codes"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Codes(_))));
    }

    #[test]
    fn test_generator_options_from_config() {
        let config = GeneratorConfig {
            audit_base_import: None,
            ..GeneratorConfig::default()
        };
        let options = generator_options(&config);
        assert_eq!(options.type_placeholder, "FILL_THIS_TYPE");
        assert_eq!(options.audit_base_import, None);
    }
}
