//! Narrow capability interfaces over the metadata database.

use crudgen_core::{CodeGroup, CodeItem, RawColumn};

use crate::Result;

/// Read-only access to table metadata.
pub trait SchemaSource {
    /// All table names of the current database.
    fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Comment of `table`, empty when there is none.
    fn fetch_table_comment(&mut self, table: &str) -> Result<String>;

    /// Columns of `table` in ordinal position order.
    fn fetch_columns(&mut self, table: &str) -> Result<Vec<RawColumn>>;
}

/// Read-only access to the shared `code` / `code_item` tables.
pub trait CodeSource {
    /// All code groups, ordered by code.
    fn list_codes(&mut self) -> Result<Vec<CodeGroup>>;

    /// A single code group, if it exists.
    fn fetch_code(&mut self, code: &str) -> Result<Option<CodeGroup>>;

    /// Items of a code group ordered by `sortOrder`.
    fn fetch_code_items(&mut self, code: &str) -> Result<Vec<CodeItem>>;
}
