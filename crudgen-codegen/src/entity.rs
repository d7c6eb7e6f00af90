//! Java entity class with one field per non-audit column.

use crudgen_core::{AUDIT_COLUMNS, ColumnDescriptor, TableDescriptor};

use crate::{
    GeneratorOptions,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

pub struct EntityClass<'a> {
    table: &'a TableDescriptor,
    options: &'a GeneratorOptions,
}

impl<'a> EntityClass<'a> {
    pub fn new(table: &'a TableDescriptor, options: &'a GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Columns that become fields; audit columns live in the base class.
    pub fn fields(&self) -> impl Iterator<Item = &'a ColumnDescriptor> {
        self.table
            .columns
            .iter()
            .filter(|c| !AUDIT_COLUMNS.contains(&c.source_name.as_str()))
    }

    pub fn render(&self) -> String {
        let description = if self.table.table_comment.is_empty() {
            self.table.table_name.clone()
        } else {
            format!("{} {}", self.table.table_name, self.table.table_comment)
        };

        let mut builder = CodeBuilder::new();
        if let Some(import) = &self.options.audit_base_import {
            builder.push_line(&format!("import {};", import));
        }
        builder
            .push_line("import lombok.Getter;")
            .push_line("import lombok.Setter;")
            .push_blank()
            .push_javadoc(&[format!("Entity for table {}", description)])
            .push_line("@Getter")
            .push_line("@Setter")
            .push_line(&format!(
                "public class {} extends {} {{",
                self.table.entity_class_name(),
                self.options.audit_base_class
            ))
            .push_indent();
        for field in self.fields() {
            builder.emit(&Field(field));
        }
        builder.push_dedent().push_line("}");
        builder.build()
    }
}

struct Field<'a>(&'a ColumnDescriptor);

impl Renderable for Field<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let column = self.0;
        let doc = if column.comment.is_empty() {
            &column.source_name
        } else {
            &column.comment
        };
        vec![
            CodeFragment::javadoc([doc.as_str()]),
            CodeFragment::line(format!(
                "private {} {};",
                column.target_type.declaration_name(),
                column.target_name
            )),
        ]
    }
}
