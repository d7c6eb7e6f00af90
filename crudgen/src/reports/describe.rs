//! Describe command report.

use crudgen_core::{ColumnDescriptor, TableDescriptor};

use super::output::{Output, Report};

/// Resolved metadata of one table.
#[derive(Debug)]
pub struct DescribeReport {
    pub table: TableDescriptor,
}

fn column_line(column: &ColumnDescriptor) -> String {
    let mut line = format!(
        "{} -> {}: {} ({})",
        column.source_name, column.target_name, column.target_type, column.raw_column_type
    );
    if column.is_primary_key {
        line.push_str(" [PK]");
    }
    if column.is_auto_increment {
        line.push_str(" [auto_increment]");
    }
    if !column.nullable {
        line.push_str(" not null");
    }
    if let Some(default) = &column.default_value {
        line.push_str(&format!(" default {}", default));
    }
    if !column.comment.is_empty() {
        line.push_str(&format!(" - {}", column.comment));
    }
    line
}

impl Report for DescribeReport {
    fn render(&self, out: &mut dyn Output) {
        let table = &self.table;
        out.title(&table.table_name);
        if !table.table_comment.is_empty() {
            out.key_value("Comment", &table.table_comment);
        }
        out.key_value("Entity", &table.entity_class_name());
        out.key_value("Mapper", &table.mapper_name());
        out.newline();

        out.section(&format!("Columns ({})", table.columns.len()));
        for column in &table.columns {
            out.list_item(&column_line(column));
        }

        if !table.has_primary_key() {
            out.newline();
            out.warning("no primary key, delete/getByPk/search will not be generated");
        }
        if !table.has_update_audit_columns() {
            out.newline();
            out.warning("no updater/updateDt columns, update will not be generated");
        }
    }
}
