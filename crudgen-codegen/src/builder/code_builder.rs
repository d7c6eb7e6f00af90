//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level in every generated file.
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use crudgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("public class Foo {")
///     .indent()
///     .line("private Long id;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class Foo {\n    private Long id;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a multi-line Javadoc comment (mutable).
    ///
    /// Empty entries become a bare ` *` separator line.
    pub fn push_javadoc(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Add an XML comment (mutable).
    pub fn push_xml_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("<!-- {} -->", text))
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JavaDoc(lines) => {
                self.push_javadoc(&lines);
            }
            CodeFragment::XmlComment(text) => {
                self.push_xml_comment(&text);
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
