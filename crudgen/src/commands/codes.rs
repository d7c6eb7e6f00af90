use std::path::PathBuf;

use clap::Args;
use crudgen_schema::ConfigFile;
use eyre::Result;

use super::{UnwrapOrExit, with_connection};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CodesCommand {
    /// Path to crudgen.toml (defaults to ./crudgen.toml)
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,
}

impl CodesCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report =
            with_connection(&config_file.config().database, |source| ops::codes(source))
                .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
