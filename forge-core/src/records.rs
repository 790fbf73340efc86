//! Stored configuration records.
//!
//! These are the rows an application author maintains through the admin
//! backend. Numeric fields keep their stored integer form; `0` always means
//! "unset" and is resolved by [`crate::defaults`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    flags::{DisplayFlags, PageFlags, RecordFlags, UpdateFlags},
    types::{ColumnType, StringSearch, StringStorage, ZeroValue},
};

/// The top-level unit code is generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Application {
    pub id: String,
    pub name: String,
    /// Package namespace of the generated sources.
    pub package: String,
    pub description: String,
    pub owner_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-application generation settings. At most one exists per application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicationConfig {
    pub id: String,
    pub application_id: String,
    pub page_type: PageFlags,
    pub token_expire_hours: i32,
}

/// Desired shape of one table of the target application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub id: String,
    pub application_id: String,
    pub name: String,
    pub comment: String,
    pub record_type: RecordFlags,
}

/// Desired shape of one column of a target table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    pub id: String,
    pub application_id: String,
    pub table_id: String,
    pub name: String,
    pub display_name: String,
    pub comment: String,
    pub display_type: DisplayFlags,
    pub column_type: i32,
    pub update_type: UpdateFlags,
    /// `1` when the column gets its own dedicated update operation.
    pub update_alone: i32,
    /// `!NIL`, a default value, or empty. See [`ZeroValue`].
    pub zero_value: String,
    /// Composite uniqueness group; `0` means none.
    pub unique_check: i32,
    pub string_type: i32,
    pub string_search: i32,
    /// Comma-separated labels for strings, `[{"key":..,"value":..}]` for integers.
    pub enum_json: String,
    pub column_length: i32,
    pub decimal_length: i32,
}

impl ColumnConfig {
    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_code(self.column_type)
    }

    pub fn string_storage(&self) -> StringStorage {
        StringStorage::from_code(self.string_type)
    }

    pub fn string_search(&self) -> StringSearch {
        StringSearch::from_code(self.string_search)
    }

    pub fn zero_value(&self) -> ZeroValue<'_> {
        ZeroValue::parse(&self.zero_value)
    }

    pub fn is_update_alone(&self) -> bool {
        self.update_alone == 1
    }

    /// The uniqueness group this column belongs to, if any.
    pub fn unique_group(&self) -> Option<i32> {
        (self.unique_check != 0).then_some(self.unique_check)
    }
}

/// Identifier of a persisted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(Uuid);

impl ArtifactId {
    /// Generate a fresh, time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A generated source artifact. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSource {
    pub id: ArtifactId,
    pub application_id: String,
    pub source: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl ApplicationSource {
    /// Create a new artifact stamped with the current time.
    pub fn new(application_id: impl Into<String>, source: Vec<u8>) -> Self {
        Self {
            id: ArtifactId::new(),
            application_id: application_id.into(),
            source,
            created_at: Utc::now(),
        }
    }
}
