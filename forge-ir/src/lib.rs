//! Intermediate schema types for the tableforge code generator.
//!
//! This crate provides the tree the schema compiler produces and code
//! generators consume. It is the only payload that crosses from compilation
//! into generation.
//!
//! # Architecture
//!
//! ```text
//! config rows → forge-codegen (compile) → forge-ir (schema tree) → generator
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no target-language concerns)
//! - Fully resolved (no unset codes, defaults or bitmasks left to interpret)
//! - Serializable, so external generators can consume them as JSON

mod app;
mod serde_helpers;
mod types;

pub use app::{
    AppMeta, AppOptions, AppSchema, ColumnSchema, EnumKey, EnumValue, PageTargets, Permissions,
    RecordTracking, TableSchema, Visibility,
};
pub use types::{SearchMode, StorageType, ValueKind};
