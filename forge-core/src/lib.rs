//! Core records and flag semantics for the tableforge schema compiler.
//!
//! This crate models the configuration rows that describe a target
//! application's database schema, and the policies for reading them:
//! bitmask decoding, logical code decoding and defaulting of unset fields.

pub mod defaults;
mod flags;
mod records;
mod types;

pub use flags::{DisplayFlags, PageFlags, RecordFlags, UpdateFlags};
pub use records::{
    Application, ApplicationConfig, ApplicationSource, ArtifactId, ColumnConfig, TableConfig,
};
pub use types::{ColumnType, NOT_NULL_SENTINEL, StringSearch, StringStorage, ZeroValue};
