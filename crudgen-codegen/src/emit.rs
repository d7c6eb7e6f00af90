//! Writing generated artifacts under the output directory.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use crudgen_core::{File, WriteResult, ensure_dir};
use eyre::Result;

use crate::GeneratedArtifact;

/// Second-granularity timestamp format used in file names.
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory under the output root that holds enum classes.
const ENUM_DIR: &str = "enums";

/// Timestamp embedded in generated file names (e.g. `20250101_093000`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp(String);

impl GenerationStamp {
    /// Stamp for the current local time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.format(STAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenerationStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes artifacts below an output root.
#[derive(Debug, Clone)]
pub struct Emitter {
    output_root: PathBuf,
}

impl Emitter {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Directory holding the artifacts of `table_name`.
    pub fn table_dir(&self, table_name: &str) -> PathBuf {
        self.output_root.join(table_name)
    }

    /// Path an artifact is written to: `<stem>_<stamp>.<ext>`.
    pub fn artifact_path(
        &self,
        table_name: &str,
        artifact: &GeneratedArtifact,
        stamp: &GenerationStamp,
    ) -> PathBuf {
        self.table_dir(table_name).join(format!(
            "{}_{}.{}",
            artifact.stem,
            stamp,
            artifact.kind.extension()
        ))
    }

    /// Write every artifact of one table and return the paths written.
    ///
    /// Two runs in the same second produce the same names; the later run
    /// replaces the earlier files.
    pub fn emit(
        &self,
        table_name: &str,
        artifacts: &[GeneratedArtifact],
        stamp: &GenerationStamp,
    ) -> Result<Vec<PathBuf>> {
        ensure_dir(&self.table_dir(table_name))?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.artifact_path(table_name, artifact, stamp);
            write(&path, &artifact.content)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Write an enum class to `<output_root>/enums/<stem>.java`.
    pub fn emit_enum(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        let path = self.output_root.join(ENUM_DIR).join(format!(
            "{}.{}",
            artifact.stem,
            artifact.kind.extension()
        ));
        write(&path, &artifact.content)?;
        Ok(path)
    }
}

fn write(path: &Path, content: &str) -> Result<()> {
    match File::new(path, content).write()? {
        WriteResult::Created => log::info!("Wrote {}", path.display()),
        WriteResult::Overwritten => log::warn!("Overwrote {}", path.display()),
    }
    Ok(())
}
