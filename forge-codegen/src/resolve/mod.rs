//! Column-level resolution rules used by the lower phase.
//!
//! - [`storage`] - storage type and value kind resolution
//! - [`unique`] - composite unique constraint grouping
//! - [`enums`] - enumerated value decoding

pub mod enums;
pub mod storage;
pub mod unique;

pub use enums::{EnumError, parse_enum_values};
pub use storage::{resolve_kind, resolve_storage};
pub use unique::group_unique_columns;
