use crudgen_core::TableDescriptor;

use super::{statement_marker, where_clause};
use crate::builder::{CodeFragment, Renderable};

/// `<delete id="delete">` by full primary key.
pub struct DeleteStatement<'a> {
    table: &'a TableDescriptor,
}

impl<'a> DeleteStatement<'a> {
    pub fn new(table: &'a TableDescriptor) -> Self {
        Self { table }
    }
}

impl Renderable for DeleteStatement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![
            statement_marker(self.table, "delete"),
            CodeFragment::line(format!("delete from {}", self.table.table_name)),
        ];
        body.extend(where_clause(self.table));

        vec![CodeFragment::block(
            r#"<delete id="delete">"#,
            body,
            "</delete>",
        )]
    }
}
