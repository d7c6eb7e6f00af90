//! Java enum generated from a code table group.

use crudgen_core::{CodeEnum, sanitize_file_stem};

use crate::{FileKind, GeneratedArtifact, builder::CodeBuilder};

/// Type name left for the developer to replace.
pub const ENUM_TYPE_PLACEHOLDER: &str = "ChangeThisTypeName";
/// Constant name prefix, numbered from 1 in `sortOrder` order.
pub const ENUM_FIELD_PLACEHOLDER: &str = "CHANGE_THIS_FIELD_NAME";

pub struct EnumGenerator<'a> {
    code: &'a CodeEnum,
}

impl<'a> EnumGenerator<'a> {
    pub fn new(code: &'a CodeEnum) -> Self {
        Self { code }
    }

    /// File stem: the code with everything but word characters removed.
    pub fn stem(&self) -> String {
        sanitize_file_stem(&self.code.group.code)
    }

    pub fn generate(&self) -> GeneratedArtifact {
        GeneratedArtifact::new(FileKind::Enum, self.stem(), self.render())
    }

    fn render(&self) -> String {
        let name = ENUM_TYPE_PLACEHOLDER;
        let group = &self.code.group;
        let title = if group.name.is_empty() || group.name == group.code {
            group.code.clone()
        } else {
            format!("{} ({})", group.code, group.name)
        };

        let last = self.code.items.len().saturating_sub(1);
        let mut builder = CodeBuilder::new();
        builder
            .push_javadoc(&[
                title,
                format!(
                    "Rename '{}' and the {}<n> constants before use.",
                    name, ENUM_FIELD_PLACEHOLDER
                ),
            ])
            .push_line(&format!("public enum {} {{", name))
            .push_indent();
        for (i, item) in self.code.items.iter().enumerate() {
            let terminator = if i == last { ";" } else { "," };
            builder.push_line(&format!(
                "{}{}(\"{}\"){}",
                ENUM_FIELD_PLACEHOLDER,
                i + 1,
                escape_java(&item.key),
                terminator
            ));
        }

        builder
            .push_blank()
            .push_line("private final String label;")
            .push_blank()
            .push_line(&format!("{}(String label) {{", name))
            .push_indent()
            .push_line("this.label = label;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line("public String label() {")
            .push_indent()
            .push_line("return label;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_javadoc(&["Constant whose label equals {@code label}, or null.".to_string()])
            .push_line(&format!(
                "public static {} fromLabel(String label) {{",
                name
            ))
            .push_indent()
            .push_line(&format!("for ({} ele : {}.values()) {{", name, name))
            .push_indent()
            .push_line("if (ele.label().equals(label)) {")
            .push_indent()
            .push_line("return ele;")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}")
            .push_line("return null;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_javadoc(&["Constant with the given name, or null.".to_string()])
            .push_line(&format!(
                "public static {} valueOfSafe(String name) {{",
                name
            ))
            .push_indent()
            .push_line("try {")
            .push_indent()
            .push_line(&format!("return {}.valueOf(name);", name))
            .push_dedent()
            .push_line("} catch (IllegalArgumentException e) {")
            .push_indent()
            .push_line("return null;")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        builder.build()
    }
}

fn escape_java(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use crudgen_core::{CodeGroup, CodeItem};

    use super::*;

    fn code(items: &[(&str, &str)]) -> CodeEnum {
        CodeEnum {
            group: CodeGroup {
                code: "PAY-TYPE".to_string(),
                name: "Payment type".to_string(),
                description: None,
            },
            items: items
                .iter()
                .enumerate()
                .map(|(i, (key, value))| CodeItem {
                    key: key.to_string(),
                    value: value.to_string(),
                    sort_order: i as i64,
                })
                .collect(),
        }
    }

    #[test]
    fn test_one_constant_per_item_in_order() {
        let code = code(&[("CASH", "Cash"), ("CARD", "Card"), ("POINT", "Point")]);
        let artifact = EnumGenerator::new(&code).generate();

        assert_eq!(artifact.kind, FileKind::Enum);
        assert_eq!(artifact.stem, "PAYTYPE");
        let content = &artifact.content;
        assert!(content.contains("    CHANGE_THIS_FIELD_NAME1(\"CASH\"),\n"));
        assert!(content.contains("    CHANGE_THIS_FIELD_NAME2(\"CARD\"),\n"));
        assert!(content.contains("    CHANGE_THIS_FIELD_NAME3(\"POINT\");\n"));
        assert!(!content.contains("CHANGE_THIS_FIELD_NAME4"));
        assert!(content.contains(" * PAY-TYPE (Payment type)\n"));
    }

    #[test]
    fn test_members() {
        let code = code(&[("Y", "Yes")]);
        let content = EnumGenerator::new(&code).generate().content;

        assert!(content.contains("public enum ChangeThisTypeName {\n"));
        assert!(content.contains("    ChangeThisTypeName(String label) {\n"));
        assert!(content.contains("    public String label() {\n"));
        assert!(content.contains("    public static ChangeThisTypeName fromLabel(String label) {\n"));
        assert!(content.contains("    public static ChangeThisTypeName valueOfSafe(String name) {\n"));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_keys_are_escaped() {
        let code = code(&[("A\"B", "quoted")]);
        let content = EnumGenerator::new(&code).generate().content;
        assert!(content.contains(r#"CHANGE_THIS_FIELD_NAME1("A\"B");"#));
    }
}
