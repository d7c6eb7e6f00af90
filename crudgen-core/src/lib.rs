//! Core utilities and types for the crudgen mapper generator.
//!
//! This crate provides the schema descriptors, type resolution and naming
//! rules shared by the schema reader and the code generators.

mod code;
mod file;
mod naming;
mod table;
mod type_mapper;

// Code table types
pub use code::{CodeEnum, CodeGroup, CodeItem};
// File operations
pub use file::{File, WriteResult, ensure_dir};
// Naming utilities
pub use naming::{sanitize_file_stem, to_camel_case, to_identifier, to_pascal_case};
// Schema descriptors
pub use table::{
    AUDIT_COLUMNS, CREATE_DT, CREATOR, ColumnDescriptor, RawColumn, SYNC_TRIGGER, TableDescriptor,
    UPDATE_DT, UPDATER,
};
// Type resolution
pub use type_mapper::{TargetType, resolve_base_type, resolve_column_type, resolve_type};
