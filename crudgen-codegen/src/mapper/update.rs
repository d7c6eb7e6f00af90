use crudgen_core::{AUDIT_COLUMNS, TableDescriptor, UPDATE_DT, UPDATER};

use super::{parameter, statement_marker, where_clause};
use crate::builder::{CodeFragment, Renderable};

/// `<update id="update">`
///
/// Only valid for tables with a primary key and both `updater` and
/// `updateDt`. Every other non-key column is set when its parameter is
/// non-null; `updateDt` is always set to `now()`.
pub struct UpdateStatement<'a> {
    table: &'a TableDescriptor,
}

impl<'a> UpdateStatement<'a> {
    pub fn new(table: &'a TableDescriptor) -> Self {
        Self { table }
    }
}

impl Renderable for UpdateStatement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut set: Vec<CodeFragment> = self
            .table
            .columns
            .iter()
            .filter(|c| !c.is_primary_key)
            .filter(|c| !AUDIT_COLUMNS.contains(&c.source_name.as_str()))
            .map(|c| {
                CodeFragment::line(format!(
                    r#"<if test="{} != null">{} = {},</if>"#,
                    c.target_name,
                    c.source_name,
                    parameter(c)
                ))
            })
            .collect();
        set.push(CodeFragment::line(format!(
            "{} = #{{{}}}, {} = now()",
            UPDATER, UPDATER, UPDATE_DT
        )));

        let mut body = vec![
            statement_marker(self.table, "update"),
            CodeFragment::line(format!("update {}", self.table.table_name)),
            CodeFragment::line("set"),
            CodeFragment::indent(set),
        ];
        body.extend(where_clause(self.table));

        vec![CodeFragment::block(
            r#"<update id="update">"#,
            body,
            "</update>",
        )]
    }
}
