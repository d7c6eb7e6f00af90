use std::path::PathBuf;

use clap::Args;
use crudgen_schema::ConfigFile;
use eyre::Result;

use super::{UnwrapOrExit, with_connection};
use crate::reports::{PingReport, Report, TerminalOutput};

#[derive(Args)]
pub struct PingCommand {
    /// Path to crudgen.toml (defaults to ./crudgen.toml)
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,
}

impl PingCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let database = &config_file.config().database;

        with_connection(database, |_| Ok(())).unwrap_or_exit();

        PingReport {
            host: database.host.clone(),
            port: database.port,
            database: database.database.clone(),
            user: database.user.clone(),
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
