//! Descriptor builders shared by the integration tests.

#![allow(dead_code)]

use crudgen_core::{ColumnDescriptor, TableDescriptor, resolve_type, to_camel_case};

pub fn column(name: &str, column_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        source_name: name.to_string(),
        target_name: to_camel_case(name),
        target_type: resolve_type(column_type),
        nullable: true,
        is_primary_key: false,
        is_auto_increment: false,
        comment: String::new(),
        default_value: None,
        raw_column_type: column_type.to_string(),
    }
}

pub fn key(name: &str, column_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        is_primary_key: true,
        nullable: false,
        ..column(name, column_type)
    }
}

pub fn auto_key(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        is_auto_increment: true,
        ..key(name, "bigint(20)")
    }
}

pub fn audit_columns() -> Vec<ColumnDescriptor> {
    vec![
        column("creator", "varchar(50)"),
        column("createDt", "datetime"),
        column("updater", "varchar(50)"),
        column("updateDt", "datetime"),
    ]
}

pub fn table(name: &str, columns: Vec<ColumnDescriptor>) -> TableDescriptor {
    TableDescriptor {
        table_name: name.to_string(),
        columns,
        table_comment: String::new(),
    }
}

/// A typical table: auto-increment key, data columns, audit columns.
pub fn app_push() -> TableDescriptor {
    let mut columns = vec![
        ColumnDescriptor {
            comment: "Push id".to_string(),
            ..auto_key("id")
        },
        ColumnDescriptor {
            nullable: false,
            ..column("user_id", "varchar(50)")
        },
        column("title", "varchar(200)"),
        column("body", "text"),
        column("sent_dt", "datetime"),
    ];
    columns.extend(audit_columns());
    TableDescriptor {
        table_comment: "Push messages".to_string(),
        ..table("app_push", columns)
    }
}
