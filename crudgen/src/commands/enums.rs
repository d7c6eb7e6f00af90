use std::path::PathBuf;

use clap::Args;
use crudgen_core::CodeGroup;
use crudgen_schema::ConfigFile;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Result, bail};

use super::{UnwrapOrExit, with_connection};
use crate::{
    ops::{self, CodeSelection},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct EnumCommand {
    /// Code to generate; prompts for one when omitted
    #[arg(conflicts_with = "all")]
    pub code: Option<String>,

    /// Generate an enum for every code
    #[arg(long)]
    pub all: bool,

    /// Path to crudgen.toml (defaults to ./crudgen.toml)
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [output].dir from the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl EnumCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let config = config_file.config();

        let selection = self.selection();
        let fetched = with_connection(&config.database, |source| {
            ops::fetch_code_enums(source, &selection, prompt_code)
        })
        .unwrap_or_exit();

        let output_dir = self.output.as_ref().unwrap_or(&config.output.dir);
        let report = ops::write_enums(fetched, output_dir);
        report.render(&mut TerminalOutput::new());

        // --all reports its failures in the summary and still succeeds
        if report.has_failures() && selection != CodeSelection::All {
            bail!("Failed to generate enum");
        }
        Ok(())
    }

    fn selection(&self) -> CodeSelection {
        match (&self.code, self.all) {
            (_, true) => CodeSelection::All,
            (Some(code), false) => CodeSelection::One(code.clone()),
            (None, false) => CodeSelection::Choose,
        }
    }
}

fn prompt_code(codes: &[CodeGroup]) -> Option<String> {
    let items: Vec<String> = codes
        .iter()
        .map(|group| format!("{} ({})", group.code, group.name))
        .collect();

    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a code")
        .items(&items)
        .default(0)
        .interact_opt();

    match selected {
        Ok(index) => index.map(|i| codes[i].code.clone()),
        Err(e) => {
            log::error!("Could not read the selection: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        cmd: EnumCommand,
    }

    fn selection(args: &[&str]) -> CodeSelection {
        let mut argv = vec!["enum"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).unwrap().cmd.selection()
    }

    #[test]
    fn test_selection() {
        assert_eq!(selection(&["--all"]), CodeSelection::All);
        assert_eq!(
            selection(&["PAY_TYPE"]),
            CodeSelection::One("PAY_TYPE".to_string())
        );
        assert_eq!(selection(&[]), CodeSelection::Choose);
    }

    #[test]
    fn test_code_conflicts_with_all() {
        assert!(Wrapper::try_parse_from(["enum", "PAY_TYPE", "--all"]).is_err());
    }
}
