use std::path::PathBuf;

use clap::{Args, CommandFactory};
use crudgen_codegen::GenerationStamp;
use crudgen_schema::{ConfigFile, SchemaReader};
use eyre::Result;

use super::{Cli, UnwrapOrExit, generator_options, with_connection};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Table to generate the mapper, interface and entity for
    pub table: Option<String>,

    /// Path to crudgen.toml (defaults to ./crudgen.toml)
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [output].dir from the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let Some(table_name) = &self.table else {
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        };

        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let config = config_file.config();

        let table = with_connection(&config.database, |source| {
            SchemaReader::new(source).fetch_table_metadata(table_name)
        })
        .unwrap_or_exit();

        let output_dir = self.output.as_ref().unwrap_or(&config.output.dir);
        let generator = generator_options(&config.generator);
        let report = ops::generate(
            &table,
            GenerateOptions {
                output_dir,
                dry_run: self.dry_run,
                generator: &generator,
                stamp: GenerationStamp::now(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
