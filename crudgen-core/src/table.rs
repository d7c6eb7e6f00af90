//! Schema descriptors produced by the schema reader.

use serde::Serialize;

use crate::{naming::to_pascal_case, type_mapper::TargetType};

/// Audit column recording who created a row.
pub const CREATOR: &str = "creator";
/// Audit column recording when a row was created.
pub const CREATE_DT: &str = "createDt";
/// Audit column recording who last updated a row.
pub const UPDATER: &str = "updater";
/// Audit column recording when a row was last updated.
pub const UPDATE_DT: &str = "updateDt";
/// Columns inherited from the common audit base type.
pub const AUDIT_COLUMNS: [&str; 4] = [CREATOR, CREATE_DT, UPDATER, UPDATE_DT];
/// Internal sync-trigger marker column, never part of generated code.
pub const SYNC_TRIGGER: &str = "syncTrigger";

/// One row of `INFORMATION_SCHEMA.COLUMNS`, as returned by a schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    /// `COLUMN_KEY` (`PRI`, `UNI`, `MUL` or empty)
    pub column_key: String,
    pub default: Option<String>,
    /// `EXTRA` (e.g. `auto_increment`)
    pub extra: String,
    pub comment: String,
    pub column_type: String,
}

impl RawColumn {
    /// Create a raw column with the given name and column type.
    ///
    /// The data type is derived from the column type by dropping any size
    /// or modifier suffix.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        let column_type = column_type.into();
        let data_type = column_type
            .split(['(', ' '])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Self {
            name: name.into(),
            data_type,
            is_nullable: true,
            column_key: String::new(),
            default: None,
            extra: String::new(),
            comment: String::new(),
            column_type,
        }
    }

    /// Mark as primary key (`COLUMN_KEY = 'PRI'`, not nullable).
    pub fn primary_key(mut self) -> Self {
        self.column_key = "PRI".to_string();
        self.is_nullable = false;
        self
    }

    /// Mark as auto-increment.
    pub fn auto_increment(mut self) -> Self {
        self.extra = "auto_increment".to_string();
        self
    }

    /// Mark as `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Set the column comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the column default.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.column_key == "PRI"
    }

    pub fn is_auto_increment(&self) -> bool {
        self.extra.to_lowercase().contains("auto_increment")
    }
}

/// Normalized metadata for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Database column identifier
    pub source_name: String,
    /// camelCase identifier used in generated code
    pub target_name: String,
    pub target_type: TargetType,
    pub nullable: bool,
    pub is_primary_key: bool,
    pub is_auto_increment: bool,
    pub comment: String,
    pub default_value: Option<String>,
    /// Unparsed type declaration (e.g. `bigint(20) unsigned`)
    pub raw_column_type: String,
}

/// Metadata for one table, columns in physical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    /// DB-canonical table name
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub table_comment: String,
}

impl TableDescriptor {
    /// Primary key columns in column order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key)
    }

    /// The primary key when there is exactly one.
    pub fn single_primary_key(&self) -> Option<&ColumnDescriptor> {
        let mut keys = self.primary_keys();
        match (keys.next(), keys.next()) {
            (Some(key), None) => Some(key),
            _ => None,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.source_name == name)
    }

    /// Whether both `updater` and `updateDt` exist.
    pub fn has_update_audit_columns(&self) -> bool {
        self.has_column(UPDATER) && self.has_column(UPDATE_DT)
    }

    /// PascalCase entity name (e.g. `app_push` -> `AppPush`).
    pub fn entity_name(&self) -> String {
        to_pascal_case(&self.table_name)
    }

    /// Mapper interface name (e.g. `AppPushMapper`).
    pub fn mapper_name(&self) -> String {
        format!("{}Mapper", self.entity_name())
    }

    /// Entity class name (e.g. `AppPushEntity`).
    pub fn entity_class_name(&self) -> String {
        format!("{}Entity", self.entity_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, pk: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            source_name: name.to_string(),
            target_name: name.to_string(),
            target_type: TargetType::String,
            nullable: !pk,
            is_primary_key: pk,
            is_auto_increment: false,
            comment: String::new(),
            default_value: None,
            raw_column_type: "varchar(10)".to_string(),
        }
    }

    fn table(columns: Vec<ColumnDescriptor>) -> TableDescriptor {
        TableDescriptor {
            table_name: "app_push".to_string(),
            columns,
            table_comment: String::new(),
        }
    }

    #[test]
    fn test_primary_keys_keep_column_order() {
        let t = table(vec![column("b", true), column("x", false), column("a", true)]);
        let keys: Vec<&str> = t.primary_keys().map(|c| c.source_name.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
        assert!(t.single_primary_key().is_none());
    }

    #[test]
    fn test_single_primary_key() {
        let t = table(vec![column("id", true), column("name", false)]);
        assert_eq!(t.single_primary_key().unwrap().source_name, "id");

        let t = table(vec![column("name", false)]);
        assert!(t.single_primary_key().is_none());
        assert!(!t.has_primary_key());
    }

    #[test]
    fn test_update_audit_columns() {
        let t = table(vec![column(UPDATER, false), column(UPDATE_DT, false)]);
        assert!(t.has_update_audit_columns());

        let t = table(vec![column(UPDATER, false)]);
        assert!(!t.has_update_audit_columns());
    }

    #[test]
    fn test_derived_names() {
        let t = table(vec![]);
        assert_eq!(t.entity_name(), "AppPush");
        assert_eq!(t.mapper_name(), "AppPushMapper");
        assert_eq!(t.entity_class_name(), "AppPushEntity");
    }

    #[test]
    fn test_raw_column_builder() {
        let raw = RawColumn::new("id", "bigint(20) unsigned")
            .primary_key()
            .auto_increment();
        assert_eq!(raw.data_type, "bigint");
        assert!(raw.is_primary_key());
        assert!(raw.is_auto_increment());
        assert!(!raw.is_nullable);
    }
}
