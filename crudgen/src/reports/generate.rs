//! Generate command report data structures.

use std::path::PathBuf;

use crudgen_codegen::FileKind;

use super::output::{Output, Report};

/// Report data from generating the artifacts of one table.
#[derive(Debug)]
pub struct GenerateReport {
    /// DB-canonical table name.
    pub table_name: String,
    pub table_comment: String,
    pub column_count: usize,
    /// Primary key column names, in column order.
    pub primary_keys: Vec<String>,
    /// One line per degradation of the generated set.
    pub warnings: Vec<String>,
    pub result: GenerateOutcome,
}

/// Files written, or the dry-run preview.
#[derive(Debug)]
pub enum GenerateOutcome {
    Written(WrittenResult),
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    /// Directory holding the table's artifacts.
    pub table_dir: PathBuf,
    pub files: Vec<ArtifactFile>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A written artifact.
#[derive(Debug)]
pub struct ArtifactFile {
    pub kind: FileKind,
    pub path: PathBuf,
}

/// An artifact rendered but not written.
#[derive(Debug)]
pub struct PreviewFile {
    pub kind: FileKind,
    /// Path the artifact would be written to.
    pub path: PathBuf,
    pub content: String,
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        if self.table_comment.is_empty() {
            out.key_value("Table", &self.table_name);
        } else {
            out.key_value(
                "Table",
                &format!("{} ({})", self.table_name, self.table_comment),
            );
        }
        out.key_value("Columns", &self.column_count.to_string());
        let keys = if self.primary_keys.is_empty() {
            "none".to_string()
        } else {
            self.primary_keys.join(", ")
        };
        out.key_value("Primary key", &keys);
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);
        out.newline();

        out.section(&format!("Generated in {}", written.table_dir.display()));
        for file in &written.files {
            out.added_item(&format!("{} ({})", file.path.display(), file.kind));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&format!("{} ({})", file.path.display(), file.kind));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_header(out);
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("{}: {}", self.table_name, warning));
        }

        match &self.result {
            GenerateOutcome::Written(written) => self.render_written(out, written),
            GenerateOutcome::Preview(preview) => self.render_preview(out, preview),
        }
    }
}
