//! Code generation for crudgen.
//!
//! Turns a [`TableDescriptor`](crudgen_core::TableDescriptor) into a MyBatis
//! mapper XML document, a mapper interface and an entity class, and a code
//! table group into a Java enum.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment)
//! - [`mapper`] - Mapper XML statements
//! - [`Generator`] - Table artifacts, as [`GenerationResult`]s
//! - [`EnumGenerator`] - Code table enums
//! - [`Emitter`] - Writing artifacts to disk

pub mod builder;
pub mod mapper;

mod artifact;
mod emit;
mod entity;
mod enum_class;
mod generator;
mod interface;
mod options;
mod outcome;

pub use artifact::{FileKind, GeneratedArtifact};
pub use emit::{Emitter, GenerationStamp};
pub use entity::EntityClass;
pub use enum_class::{ENUM_FIELD_PLACEHOLDER, ENUM_TYPE_PLACEHOLDER, EnumGenerator};
pub use generator::{GeneratedSet, Generator};
pub use interface::MapperInterface;
pub use options::GeneratorOptions;
pub use outcome::{DegradationReason, GenerationResult};
