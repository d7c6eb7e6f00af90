use crudgen_core::TableDescriptor;

use super::{grouped_lines, key_conditions, statement_marker, where_clause};
use crate::builder::{CodeFragment, Renderable};

/// `select <all columns> from <table>` shared by both selects.
fn select_from(table: &TableDescriptor) -> Vec<CodeFragment> {
    let names: Vec<String> = table.columns.iter().map(|c| c.source_name.clone()).collect();
    vec![
        CodeFragment::line("select"),
        CodeFragment::indent(grouped_lines(&names)),
        CodeFragment::line(format!("from {}", table.table_name)),
    ]
}

fn select_header(id: &str, result_type: &str) -> String {
    format!(r#"<select id="{}" resultType="{}">"#, id, result_type)
}

/// `<select id="getByPk">`, a single row by full primary key.
pub struct GetByPkStatement<'a> {
    table: &'a TableDescriptor,
    result_type: &'a str,
}

impl<'a> GetByPkStatement<'a> {
    pub fn new(table: &'a TableDescriptor, result_type: &'a str) -> Self {
        Self { table, result_type }
    }
}

impl Renderable for GetByPkStatement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![statement_marker(self.table, "getByPk")];
        body.extend(select_from(self.table));
        body.extend(where_clause(self.table));

        vec![CodeFragment::block(
            select_header("getByPk", self.result_type),
            body,
            "</select>",
        )]
    }
}

/// `<select id="search">`
///
/// The conditions sit in a dynamic `<where>` block, but only the primary
/// key columns are offered.
pub struct SearchStatement<'a> {
    table: &'a TableDescriptor,
    result_type: &'a str,
}

impl<'a> SearchStatement<'a> {
    pub fn new(table: &'a TableDescriptor, result_type: &'a str) -> Self {
        Self { table, result_type }
    }
}

impl Renderable for SearchStatement<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![statement_marker(self.table, "search")];
        body.extend(select_from(self.table));
        body.push(CodeFragment::line("<where>"));
        body.extend(
            key_conditions(self.table)
                .into_iter()
                .map(|condition| CodeFragment::line(format!("and {}", condition))),
        );
        body.push(CodeFragment::line("</where>"));

        vec![CodeFragment::block(
            select_header("search", self.result_type),
            body,
            "</select>",
        )]
    }
}
