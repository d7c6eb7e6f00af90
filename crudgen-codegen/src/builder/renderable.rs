//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Statements and class members describe themselves as fragments; the
//! [`CodeBuilder`](super::CodeBuilder) owns indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A Javadoc comment, one entry per line.
    JavaDoc(Vec<String>),
    /// An XML comment on a single line.
    XmlComment(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a Javadoc comment from its lines.
    pub fn javadoc<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::JavaDoc(lines.into_iter().map(Into::into).collect())
    }

    /// Create an XML comment fragment.
    pub fn xml_comment(s: impl Into<String>) -> Self {
        Self::XmlComment(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
