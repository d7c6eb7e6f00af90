use std::path::PathBuf;

use clap::Args;
use crudgen_schema::ConfigFile;
use eyre::{Context, Result};

use super::{UnwrapOrExit, with_connection};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DescribeCommand {
    /// Table to describe
    pub table: String,

    /// Path to crudgen.toml (defaults to ./crudgen.toml)
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,

    /// Print the table metadata as JSON
    #[arg(long)]
    pub json: bool,
}

impl DescribeCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = with_connection(&config_file.config().database, |source| {
            ops::describe(source, &self.table)
        })
        .unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report.table)
                .wrap_err("Failed to serialize table metadata")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
