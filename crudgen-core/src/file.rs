use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Create a directory and all its parents, succeeding if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .wrap_err_with(|| format!("failed to create directory '{}'", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any existing content
    pub fn write(&self) -> Result<WriteResult> {
        let result = if self.exists() {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        };
        write_file(&self.path, &self.content)?;
        Ok(result)
    }
}
