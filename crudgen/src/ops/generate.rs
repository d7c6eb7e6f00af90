//! Generate operation - mapper XML, interface and entity for one table.

use std::path::Path;

use crudgen_codegen::{Emitter, GenerationStamp, Generator, GeneratorOptions};
use crudgen_core::TableDescriptor;
use eyre::{Context, Result};

use crate::reports::{
    ArtifactFile, GenerateOutcome, GenerateReport, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory; artifacts land in `<output_dir>/<table>/`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub generator: &'a GeneratorOptions,
    pub stamp: GenerationStamp,
}

/// Execute the generate operation.
///
/// Degraded generations still succeed; their reasons end up in the report's
/// warnings.
pub fn generate(table: &TableDescriptor, opts: GenerateOptions) -> Result<GenerateReport> {
    let set = Generator::new(table, opts.generator).generate();
    let warnings = set.degradations().iter().map(|r| r.to_string()).collect();
    let emitter = Emitter::new(opts.output_dir);

    let result = if opts.dry_run {
        let files = set
            .artifacts()
            .into_iter()
            .map(|artifact| PreviewFile {
                kind: artifact.kind,
                path: emitter.artifact_path(&table.table_name, artifact, &opts.stamp),
                content: artifact.content.clone(),
            })
            .collect();
        GenerateOutcome::Preview(PreviewResult { files })
    } else {
        let artifacts = set.into_artifacts();
        let paths = emitter
            .emit(&table.table_name, &artifacts, &opts.stamp)
            .wrap_err_with(|| format!("Failed to write artifacts for {}", table.table_name))?;
        let files = artifacts
            .iter()
            .zip(paths)
            .map(|(artifact, path)| ArtifactFile {
                kind: artifact.kind,
                path,
            })
            .collect();
        GenerateOutcome::Written(WrittenResult {
            table_dir: emitter.table_dir(&table.table_name),
            files,
        })
    };

    Ok(GenerateReport {
        table_name: table.table_name.clone(),
        table_comment: table.table_comment.clone(),
        column_count: table.columns.len(),
        primary_keys: table
            .primary_keys()
            .map(|c| c.source_name.clone())
            .collect(),
        warnings,
        result,
    })
}
