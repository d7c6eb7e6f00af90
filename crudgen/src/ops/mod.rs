//! Core operations.
//!
//! This module contains the business logic for crudgen commands,
//! separated from CLI argument parsing, the database connection and
//! output rendering.

pub mod codes;
pub mod describe;
pub mod enums;
pub mod generate;

pub use codes::codes;
pub use describe::describe;
pub use enums::{CodeSelection, fetch_code_enums, write_enums};
pub use generate::{GenerateOptions, generate};
