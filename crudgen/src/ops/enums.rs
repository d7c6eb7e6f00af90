//! Enum operation - Java enums from the code table.

use std::path::Path;

use crudgen_codegen::{Emitter, EnumGenerator};
use crudgen_core::{CodeEnum, CodeGroup};
use crudgen_schema::{CodeReader, CodeSource};

use crate::reports::{EnumFailure, EnumReport, GeneratedEnum};

/// Which codes to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeSelection {
    One(String),
    All,
    /// Pick one from the listed codes.
    Choose,
}

/// A code and the outcome of reading it.
pub type FetchedCode = (String, crudgen_schema::Result<CodeEnum>);

/// Read the selected codes.
///
/// A single named code fails the whole operation. With [`CodeSelection::All`]
/// each failure is kept next to its code so the rest still run.
/// `choose` is only called for [`CodeSelection::Choose`]; returning `None`
/// selects nothing.
pub fn fetch_code_enums<S, F>(
    source: &mut S,
    selection: &CodeSelection,
    choose: F,
) -> crudgen_schema::Result<Vec<FetchedCode>>
where
    S: CodeSource + ?Sized,
    F: FnOnce(&[CodeGroup]) -> Option<String>,
{
    let mut reader = CodeReader::new(source);
    match selection {
        CodeSelection::One(code) => {
            let code_enum = reader.fetch_code_enum(code)?;
            Ok(vec![(code.clone(), Ok(code_enum))])
        }
        CodeSelection::All => {
            let codes = reader.list_codes()?;
            log::info!("Generating {} code enums", codes.len());
            Ok(codes
                .into_iter()
                .map(|group| {
                    let result = reader.fetch_code_enum(&group.code);
                    (group.code, result)
                })
                .collect())
        }
        CodeSelection::Choose => {
            let codes = reader.list_codes()?;
            if codes.is_empty() {
                return Ok(Vec::new());
            }
            match choose(&codes) {
                Some(code) => {
                    let code_enum = reader.fetch_code_enum(&code)?;
                    Ok(vec![(code, Ok(code_enum))])
                }
                None => Ok(Vec::new()),
            }
        }
    }
}

/// Render and write each fetched code, collecting failures instead of
/// stopping at the first one.
pub fn write_enums(fetched: Vec<FetchedCode>, output_dir: &Path) -> EnumReport {
    let emitter = Emitter::new(output_dir);
    let mut report = EnumReport::default();

    for (code, result) in fetched {
        let code_enum = match result {
            Ok(code_enum) => code_enum,
            Err(e) => {
                log::warn!("Skipping code {}: {}", code, e);
                report.failures.push(EnumFailure {
                    code,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let artifact = EnumGenerator::new(&code_enum).generate();
        match emitter.emit_enum(&artifact) {
            Ok(path) => report.generated.push(GeneratedEnum { code, path }),
            Err(e) => report.failures.push(EnumFailure {
                code,
                message: format!("{:#}", e),
            }),
        }
    }

    report
}
