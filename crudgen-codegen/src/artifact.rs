use std::fmt;

/// Kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Mapper,
    Interface,
    Entity,
    Enum,
}

impl FileKind {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Mapper => "xml",
            FileKind::Interface | FileKind::Entity | FileKind::Enum => "java",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileKind::Mapper => "mapper XML",
            FileKind::Interface => "mapper interface",
            FileKind::Entity => "entity class",
            FileKind::Enum => "enum class",
        };
        f.write_str(label)
    }
}

/// One generated file before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub content: String,
    pub kind: FileKind,
    /// Logical file name, without timestamp or extension.
    pub stem: String,
}

impl GeneratedArtifact {
    pub fn new(kind: FileKind, stem: impl Into<String>, content: String) -> Self {
        Self {
            content,
            kind,
            stem: stem.into(),
        }
    }
}
