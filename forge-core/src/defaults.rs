//! Defaulting policy for unset configuration fields.
//!
//! Stored rows use `0` for "unset". The admin backend fills these in on
//! insert, but rows written by other means may still carry zeros, so the
//! compiler applies the same policy exactly once before resolution.

use crate::{
    flags::{RecordFlags, UpdateFlags},
    records::{ColumnConfig, TableConfig},
    types::{ColumnType, StringSearch, StringStorage},
};

/// Default `record_type`: track creation time only.
pub const DEFAULT_RECORD_TYPE: RecordFlags = RecordFlags::new(RecordFlags::CREATE_TIME);
/// Default `update_type`: creatable, updatable and filterable.
pub const DEFAULT_UPDATE_TYPE: UpdateFlags = UpdateFlags::new(UpdateFlags::ALL);

/// A single field that was filled in by the defaulting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDefault {
    pub field: &'static str,
    pub value: i32,
}

/// Fill in unset table fields, returning what was changed.
pub fn apply_table_defaults(table: &mut TableConfig) -> Vec<AppliedDefault> {
    let mut applied = Vec::new();
    if table.record_type.is_unset() {
        table.record_type = DEFAULT_RECORD_TYPE;
        applied.push(AppliedDefault {
            field: "record_type",
            value: DEFAULT_RECORD_TYPE.bits(),
        });
    }
    applied
}

/// Fill in unset column fields, returning what was changed.
pub fn apply_column_defaults(column: &mut ColumnConfig) -> Vec<AppliedDefault> {
    let mut applied = Vec::new();

    let mut fill = |field: &'static str, slot: &mut i32, value: i32| {
        if *slot == 0 {
            *slot = value;
            applied.push(AppliedDefault { field, value });
        }
    };
    fill("column_type", &mut column.column_type, ColumnType::String.code());
    fill("string_type", &mut column.string_type, StringStorage::Bounded.code());
    fill("string_search", &mut column.string_search, StringSearch::Prefix.code());

    if column.update_type.is_unset() {
        column.update_type = DEFAULT_UPDATE_TYPE;
        applied.push(AppliedDefault {
            field: "update_type",
            value: DEFAULT_UPDATE_TYPE.bits(),
        });
    }

    applied
}
