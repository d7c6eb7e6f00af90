//! In-memory metadata source for tests.

use std::collections::HashMap;

use crudgen_core::{CodeGroup, CodeItem, RawColumn};

use crate::{CodeSource, Result, SchemaSource};

/// A call made against an [`InMemorySource`], recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    ListTables,
    TableComment(String),
    Columns(String),
    ListCodes,
    Code(String),
    CodeItems(String),
}

/// Metadata source backed by plain collections.
///
/// Tables keep their insertion order so `list_tables` is deterministic.
#[derive(Debug, Default)]
pub struct InMemorySource {
    tables: Vec<(String, String, Vec<RawColumn>)>,
    codes: Vec<CodeGroup>,
    items: HashMap<String, Vec<CodeItem>>,
    calls: Vec<SourceCall>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with a comment and its columns in ordinal order.
    pub fn with_table(
        mut self,
        name: impl Into<String>,
        comment: impl Into<String>,
        columns: Vec<RawColumn>,
    ) -> Self {
        self.tables.push((name.into(), comment.into(), columns));
        self
    }

    /// Add a code group with its items, in any order.
    pub fn with_code(mut self, group: CodeGroup, items: Vec<CodeItem>) -> Self {
        self.items.insert(group.code.clone(), items);
        self.codes.push(group);
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> &[SourceCall] {
        &self.calls
    }

    fn table(&self, name: &str) -> Option<&(String, String, Vec<RawColumn>)> {
        self.tables.iter().find(|(n, _, _)| n == name)
    }
}

impl SchemaSource for InMemorySource {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        self.calls.push(SourceCall::ListTables);
        Ok(self.tables.iter().map(|(n, _, _)| n.clone()).collect())
    }

    fn fetch_table_comment(&mut self, table: &str) -> Result<String> {
        self.calls.push(SourceCall::TableComment(table.to_string()));
        Ok(self
            .table(table)
            .map(|(_, comment, _)| comment.clone())
            .unwrap_or_default())
    }

    fn fetch_columns(&mut self, table: &str) -> Result<Vec<RawColumn>> {
        self.calls.push(SourceCall::Columns(table.to_string()));
        Ok(self
            .table(table)
            .map(|(_, _, columns)| columns.clone())
            .unwrap_or_default())
    }
}

impl CodeSource for InMemorySource {
    fn list_codes(&mut self) -> Result<Vec<CodeGroup>> {
        self.calls.push(SourceCall::ListCodes);
        let mut codes = self.codes.clone();
        codes.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(codes)
    }

    fn fetch_code(&mut self, code: &str) -> Result<Option<CodeGroup>> {
        self.calls.push(SourceCall::Code(code.to_string()));
        Ok(self.codes.iter().find(|g| g.code == code).cloned())
    }

    fn fetch_code_items(&mut self, code: &str) -> Result<Vec<CodeItem>> {
        self.calls.push(SourceCall::CodeItems(code.to_string()));
        let mut items = self.items.get(code).cloned().unwrap_or_default();
        items.sort_by_key(|item| item.sort_order);
        Ok(items)
    }
}
