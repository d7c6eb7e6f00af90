use serde::Serialize;

/// A row of the shared `code` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeGroup {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A row of `code_item`, one enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeItem {
    pub key: String,
    pub value: String,
    pub sort_order: i64,
}

/// A code group together with its items, ordered by `sortOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEnum {
    pub group: CodeGroup,
    pub items: Vec<CodeItem>,
}
