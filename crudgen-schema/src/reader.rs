//! Builds [`TableDescriptor`]s from a [`SchemaSource`].

use crudgen_core::{
    ColumnDescriptor, RawColumn, SYNC_TRIGGER, TableDescriptor, resolve_column_type, to_camel_case,
};

use crate::{Error, Result, SchemaSource};

/// Maximum number of "did you mean" suggestions on an unknown table.
const MAX_SUGGESTIONS: usize = 5;

/// Reads table metadata through a schema source.
pub struct SchemaReader<'a, S: SchemaSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: SchemaSource + ?Sized> SchemaReader<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    /// Resolve `requested` against the database and load its columns.
    ///
    /// The lookup is case-insensitive; the returned descriptor carries the
    /// name as the database spells it. Columns come back in ordinal order
    /// with the sync-trigger marker column removed.
    pub fn fetch_table_metadata(&mut self, requested: &str) -> Result<TableDescriptor> {
        let tables = self.source.list_tables()?;
        let Some(table_name) = tables
            .iter()
            .find(|t| t.eq_ignore_ascii_case(requested))
            .cloned()
        else {
            return Err(Error::table_not_found(
                requested,
                suggest_tables(requested, &tables),
            ));
        };
        if table_name != requested {
            log::info!("Using table '{}' for '{}'", table_name, requested);
        }

        let table_comment = self.source.fetch_table_comment(&table_name)?;

        let columns: Vec<ColumnDescriptor> = self
            .source
            .fetch_columns(&table_name)?
            .into_iter()
            .filter(|c| c.name != SYNC_TRIGGER)
            .map(describe_column)
            .collect();
        if columns.is_empty() {
            return Err(Box::new(Error::NoColumns { table: table_name }));
        }

        let table = TableDescriptor {
            table_name,
            columns,
            table_comment,
        };
        log_primary_key_shape(&table);

        Ok(table)
    }
}

fn describe_column(raw: RawColumn) -> ColumnDescriptor {
    let target_type = resolve_column_type(&raw.column_type, &raw.data_type);
    log::debug!(
        "{} {} -> {}",
        raw.name,
        raw.column_type,
        target_type.qualified_name()
    );
    ColumnDescriptor {
        target_name: to_camel_case(&raw.name),
        target_type,
        nullable: raw.is_nullable,
        is_primary_key: raw.is_primary_key(),
        is_auto_increment: raw.is_auto_increment(),
        comment: raw.comment,
        default_value: raw.default,
        raw_column_type: raw.column_type,
        source_name: raw.name,
    }
}

fn log_primary_key_shape(table: &TableDescriptor) {
    let keys: Vec<&str> = table
        .primary_keys()
        .map(|c| c.source_name.as_str())
        .collect();
    match keys.len() {
        0 => log::warn!("Table '{}' has no primary key", table.table_name),
        1 => log::info!("Primary key: {}", keys[0]),
        _ => log::info!("Composite primary key: {}", keys.join(", ")),
    }
}

/// Tables whose names contain `requested`, or are contained in it,
/// ignoring case. At most five, in source order.
pub fn suggest_tables(requested: &str, tables: &[String]) -> Vec<String> {
    let needle = requested.to_lowercase();
    tables
        .iter()
        .filter(|t| {
            let name = t.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use crudgen_core::TargetType;

    use super::*;
    use crate::{InMemorySource, SourceCall};

    fn push_columns() -> Vec<RawColumn> {
        vec![
            RawColumn::new("id", "bigint(20)")
                .primary_key()
                .auto_increment()
                .comment("Push id"),
            RawColumn::new("user_id", "varchar(50)").not_null(),
            RawColumn::new("syncTrigger", "tinyint(1)"),
            RawColumn::new("sent_dt", "datetime"),
        ]
    }

    #[test]
    fn test_fetch_resolves_columns_in_order() {
        let mut source =
            InMemorySource::new().with_table("app_push", "Push messages", push_columns());
        let table = SchemaReader::new(&mut source)
            .fetch_table_metadata("app_push")
            .unwrap();

        assert_eq!(table.table_name, "app_push");
        assert_eq!(table.table_comment, "Push messages");
        let names: Vec<&str> = table
            .columns
            .iter()
            .map(|c| c.source_name.as_str())
            .collect();
        assert_eq!(names, ["id", "user_id", "sent_dt"]);

        let id = &table.columns[0];
        assert!(id.is_primary_key);
        assert!(id.is_auto_increment);
        assert!(!id.nullable);
        assert_eq!(id.target_type, TargetType::Long);
        assert_eq!(id.comment, "Push id");

        let user_id = &table.columns[1];
        assert_eq!(user_id.target_name, "userId");
        assert_eq!(user_id.target_type, TargetType::String);
        assert!(!user_id.nullable);

        assert_eq!(table.columns[2].target_type, TargetType::LocalDateTime);
    }

    #[test]
    fn test_sync_trigger_is_dropped() {
        let mut source = InMemorySource::new().with_table("app_push", "", push_columns());
        let table = SchemaReader::new(&mut source)
            .fetch_table_metadata("app_push")
            .unwrap();
        assert!(!table.has_column(SYNC_TRIGGER));
    }

    #[test]
    fn test_only_sync_trigger_has_no_columns() {
        let mut source = InMemorySource::new().with_table(
            "t",
            "",
            vec![RawColumn::new("syncTrigger", "tinyint(1)")],
        );
        let err = SchemaReader::new(&mut source)
            .fetch_table_metadata("t")
            .unwrap_err();
        assert!(matches!(*err, Error::NoColumns { ref table } if table == "t"));
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_canonical() {
        let mut source = InMemorySource::new().with_table("App_Push", "", push_columns());
        let table = SchemaReader::new(&mut source)
            .fetch_table_metadata("app_push")
            .unwrap();
        assert_eq!(table.table_name, "App_Push");
        assert_eq!(
            source.calls(),
            [
                SourceCall::ListTables,
                SourceCall::TableComment("App_Push".into()),
                SourceCall::Columns("App_Push".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_table_suggests() {
        let mut source = InMemorySource::new()
            .with_table("app_push", "", push_columns())
            .with_table("push_log", "", push_columns())
            .with_table("member", "", push_columns());

        let err = SchemaReader::new(&mut source)
            .fetch_table_metadata("PUSH")
            .unwrap_err();
        match *err {
            Error::TableNotFound {
                ref name,
                ref suggestions,
                ..
            } => {
                assert_eq!(name, "PUSH");
                assert_eq!(suggestions, &["app_push", "push_log"]);
            }
            _ => panic!("Expected TableNotFound, got {:?}", err),
        }
        // nothing beyond the table list is queried
        assert_eq!(source.calls(), [SourceCall::ListTables]);
    }

    #[test]
    fn test_empty_table_is_no_columns() {
        let mut source = InMemorySource::new().with_table("empty", "", vec![]);
        let err = SchemaReader::new(&mut source)
            .fetch_table_metadata("empty")
            .unwrap_err();
        assert!(matches!(*err, Error::NoColumns { ref table } if table == "empty"));
    }

    #[test]
    fn test_suggestions_capped_at_five() {
        let tables: Vec<String> = (0..8).map(|i| format!("log_{}", i)).collect();
        let suggestions = suggest_tables("log", &tables);
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0], "log_0");
    }

    #[test]
    fn test_suggestions_match_in_both_directions() {
        let tables = vec!["user".to_string(), "order".to_string()];
        assert_eq!(suggest_tables("user_detail", &tables), ["user"]);
        assert!(suggest_tables("zzz", &tables).is_empty());
    }
}
