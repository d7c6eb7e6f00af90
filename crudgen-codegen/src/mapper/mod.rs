//! MyBatis mapper XML document.

mod delete;
mod insert;
mod select;
mod update;

use crudgen_core::{ColumnDescriptor, TableDescriptor};
use indexmap::IndexSet;

pub use self::{
    delete::DeleteStatement,
    insert::InsertStatement,
    select::{GetByPkStatement, SearchStatement},
    update::UpdateStatement,
};
use crate::{
    DegradationReason, GenerationResult, GeneratorOptions,
    builder::{CodeBuilder, CodeFragment},
};

/// Columns per line in column and value lists.
const COLUMNS_PER_LINE: usize = 4;

/// Renders the full mapper document for one table.
pub struct MapperDocument<'a> {
    table: &'a TableDescriptor,
    options: &'a GeneratorOptions,
}

impl<'a> MapperDocument<'a> {
    pub fn new(table: &'a TableDescriptor, options: &'a GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Render the document.
    ///
    /// Statements that cannot be generated are replaced by an XML comment
    /// naming the table, and the reason is recorded in the result.
    pub fn render(&self) -> GenerationResult<String> {
        let table = self.table;
        let mut reasons = IndexSet::new();

        let mut builder = CodeBuilder::new();
        builder
            .push_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
            .push_line(
                r#"<!DOCTYPE mapper PUBLIC "-//mybatis.org//DTD Mapper 3.0//EN" "http://mybatis.org/dtd/mybatis-3-mapper.dtd">"#,
            )
            .push_line(&format!(
                r#"<mapper namespace="{}">"#,
                self.options.type_placeholder
            ))
            .push_blank()
            .push_indent();

        builder.emit(&InsertStatement::new(table)).push_blank();

        if !table.has_update_audit_columns() {
            reasons.insert(DegradationReason::NoUpdateAuditColumns);
            builder.push_xml_comment(&format!(
                "Table {} does not have updater/updateDt columns - UPDATE not needed",
                table.table_name
            ));
            builder.push_blank();
        } else if table.has_primary_key() {
            builder.emit(&UpdateStatement::new(table)).push_blank();
        }

        if table.has_primary_key() {
            let result_type = format!(
                "{}.{}",
                self.options.package_placeholder,
                table.entity_class_name()
            );
            builder
                .emit(&DeleteStatement::new(table))
                .push_blank()
                .emit(&GetByPkStatement::new(table, &result_type))
                .push_blank()
                .emit(&SearchStatement::new(table, &result_type))
                .push_blank();
        } else {
            reasons.insert(DegradationReason::NoPrimaryKey);
            let mut skipped = vec!["delete", "getByPk", "search"];
            if table.has_update_audit_columns() {
                skipped.insert(0, "update");
            }
            for statement in skipped {
                builder.push_xml_comment(&no_primary_key(&table.table_name, statement));
            }
            builder.push_blank();
        }

        builder.push_dedent().push_line("</mapper>");
        GenerationResult::new(builder.build(), reasons)
    }
}

/// Placeholder text for a statement skipped for lack of a primary key.
pub fn no_primary_key(table_name: &str, statement: &str) -> String {
    format!(
        "No primary key found for table {} - {} not generated",
        table_name, statement
    )
}

/// `/*AppPushMapper.insert*/` marker that opens every statement.
fn statement_marker(table: &TableDescriptor, id: &str) -> CodeFragment {
    CodeFragment::line(format!("/*{}.{}*/", table.mapper_name(), id))
}

/// `#{targetName}` parameter reference.
fn parameter(column: &ColumnDescriptor) -> String {
    format!("#{{{}}}", column.target_name)
}

/// Comma-separated items, four per line, every line but the last ending
/// in a comma.
fn grouped_lines(items: &[String]) -> Vec<CodeFragment> {
    let chunks: Vec<String> = items
        .chunks(COLUMNS_PER_LINE)
        .map(|chunk| chunk.join(", "))
        .collect();
    let last = chunks.len().saturating_sub(1);
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i < last {
                CodeFragment::line(format!("{},", line))
            } else {
                CodeFragment::line(line)
            }
        })
        .collect()
}

/// `column = #{param}` for every primary key, in column order.
fn key_conditions(table: &TableDescriptor) -> Vec<String> {
    table
        .primary_keys()
        .map(|pk| format!("{} = {}", pk.source_name, parameter(pk)))
        .collect()
}

/// `where a = #{a}` followed by one `and b = #{b}` line per further key.
fn where_clause(table: &TableDescriptor) -> Vec<CodeFragment> {
    key_conditions(table)
        .into_iter()
        .enumerate()
        .map(|(i, condition)| {
            let keyword = if i == 0 { "where" } else { "and" };
            CodeFragment::line(format!("{} {}", keyword, condition))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crudgen_core::{ColumnDescriptor, TargetType};

    use super::*;

    fn column(name: &str, pk: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            source_name: name.to_string(),
            target_name: crudgen_core::to_camel_case(name),
            target_type: TargetType::String,
            nullable: !pk,
            is_primary_key: pk,
            is_auto_increment: false,
            comment: String::new(),
            default_value: None,
            raw_column_type: "varchar(20)".to_string(),
        }
    }

    fn table(columns: Vec<ColumnDescriptor>) -> TableDescriptor {
        TableDescriptor {
            table_name: "tag".to_string(),
            columns,
            table_comment: String::new(),
        }
    }

    #[test]
    fn test_grouped_lines() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        assert_eq!(
            grouped_lines(&items),
            vec![CodeFragment::line("a, b, c, d,"), CodeFragment::line("e")]
        );
        assert!(grouped_lines(&[]).is_empty());
    }

    #[test]
    fn test_where_clause_conjoins_keys() {
        let t = table(vec![
            column("a_id", true),
            column("name", false),
            column("b_id", true),
        ]);
        assert_eq!(
            where_clause(&t),
            vec![
                CodeFragment::line("where a_id = #{aId}"),
                CodeFragment::line("and b_id = #{bId}"),
            ]
        );
    }

    #[test]
    fn test_no_key_document_is_degraded() {
        let t = table(vec![column("name", false)]);
        let result = MapperDocument::new(&t, &GeneratorOptions::default()).render();
        let reasons: Vec<_> = result.reasons().copied().collect();
        assert_eq!(
            reasons,
            [
                DegradationReason::NoUpdateAuditColumns,
                DegradationReason::NoPrimaryKey
            ]
        );
        let xml = result.value();
        assert!(xml.contains("<!-- No primary key found for table tag - delete not generated -->"));
        assert!(!xml.contains("where"));
        // update is reported once, for the missing audit columns
        assert!(!xml.contains("update not generated"));
    }
}
