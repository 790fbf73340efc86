//! Storage type resolution.
//!
//! Maps a column's logical type code and width fields to a concrete storage
//! type. Resolution is total: unknown codes and missing widths resolve to
//! [`StorageType::Unspecified`], leaving the choice to the generator.

use tableforge_core::{ColumnConfig, ColumnType, StringStorage};
use tableforge_ir::{StorageType, ValueKind};

/// Resolve the storage type of a column.
pub fn resolve_storage(column: &ColumnConfig) -> StorageType {
    match column.column_type() {
        ColumnType::String => resolve_string(column.string_storage(), column.column_length),
        ColumnType::Number => resolve_number(column.column_length, column.decimal_length),
        ColumnType::DateTime | ColumnType::Decimal | ColumnType::Other(_) => {
            StorageType::Unspecified
        }
    }
}

/// Resolve the logical value kind of a column.
pub fn resolve_kind(column: &ColumnConfig) -> ValueKind {
    match column.column_type() {
        ColumnType::String => ValueKind::String,
        ColumnType::Number => ValueKind::Number,
        ColumnType::DateTime => ValueKind::DateTime,
        ColumnType::Decimal => ValueKind::Decimal,
        ColumnType::Other(code) => ValueKind::Other(code),
    }
}

fn resolve_string(storage: StringStorage, length: i32) -> StorageType {
    match (storage, positive(length)) {
        (StringStorage::Unbounded, _) => StorageType::Text,
        (StringStorage::Bounded, Some(len)) => StorageType::Varchar(len),
        (StringStorage::Bounded, None) => StorageType::Unspecified,
    }
}

fn resolve_number(length: i32, decimal_length: i32) -> StorageType {
    match (positive(length), positive(decimal_length)) {
        // A scale without a precision keeps the stored zero precision.
        (precision, Some(scale)) => StorageType::Decimal {
            precision: precision.unwrap_or(0),
            scale,
        },
        (Some(len), None) => StorageType::Int(len),
        (None, None) => StorageType::Unspecified,
    }
}

fn positive(value: i32) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}
