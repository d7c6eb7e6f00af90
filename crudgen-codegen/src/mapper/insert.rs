use crudgen_core::{CREATE_DT, ColumnDescriptor, TableDescriptor, UPDATE_DT};

use super::{grouped_lines, parameter, statement_marker};
use crate::builder::{CodeFragment, Renderable};

/// `<insert id="insert">`
///
/// Auto-increment columns are left to the database, as are `createDt`
/// and `updateDt`.
pub struct InsertStatement<'a> {
    table: &'a TableDescriptor,
}

impl<'a> InsertStatement<'a> {
    pub fn new(table: &'a TableDescriptor) -> Self {
        Self { table }
    }

    /// Columns that appear in the column and value lists, in table order.
    pub fn columns(&self) -> impl Iterator<Item = &'a ColumnDescriptor> {
        self.table
            .columns
            .iter()
            .filter(|c| !c.is_auto_increment)
            .filter(|c| c.source_name != CREATE_DT && c.source_name != UPDATE_DT)
    }

    fn header(&self) -> String {
        match self.table.single_primary_key() {
            Some(pk) if pk.is_auto_increment => format!(
                r#"<insert id="insert" useGeneratedKeys="true" keyProperty="{}">"#,
                pk.target_name
            ),
            _ => r#"<insert id="insert">"#.to_string(),
        }
    }
}

impl Renderable for InsertStatement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let names: Vec<String> = self.columns().map(|c| c.source_name.clone()).collect();
        let values: Vec<String> = self.columns().map(parameter).collect();

        vec![CodeFragment::block(
            self.header(),
            vec![
                statement_marker(self.table, "insert"),
                CodeFragment::line(format!("insert into {} (", self.table.table_name)),
                CodeFragment::indent(grouped_lines(&names)),
                CodeFragment::line(") values ("),
                CodeFragment::indent(grouped_lines(&values)),
                CodeFragment::line(")"),
            ],
            "</insert>",
        )]
    }
}
