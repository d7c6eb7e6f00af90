use std::path::{Path, PathBuf};

use super::Config;
use crate::Result;

/// Represents a crudgen.toml file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a crudgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::ConfigIo {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudgen.toml");
        fs::write(
            &path,
            "[database]\nhost = \"localhost\"\nuser = \"app\"\ndatabase = \"shop\"\n",
        )
        .unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("[database]"));
        assert_eq!(file.config().database.database, "shop");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("missing.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::ConfigIo { .. }));
    }
}
