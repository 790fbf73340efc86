//! Application schema IR.
//!
//! This module defines the tree handed to code generators: one application,
//! its ordered tables, and for each table its ordered columns and composite
//! unique constraints.
//!
//! # Architecture
//!
//! ```text
//! config rows → Schema Compiler (lowering) → AppSchema → Generator (codegen)
//! ```

use serde::Serialize;

use crate::{SearchMode, StorageType, ValueKind};

/// Application schema - the complete input of a code generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSchema {
    /// Application metadata.
    pub meta: AppMeta,
    /// Generation settings, if the application has any.
    pub options: Option<AppOptions>,
    /// Tables in storage order.
    pub tables: Vec<TableSchema>,
}

impl AppSchema {
    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    /// Total number of composite unique constraints across all tables.
    pub fn constraint_count(&self) -> usize {
        self.tables.iter().map(|t| t.unique_constraints.len()).sum()
    }
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppMeta {
    pub id: String,
    pub name: String,
    /// Package namespace for generated sources.
    pub package: String,
    pub description: Option<String>,
    pub owner: Option<String>,
}

/// Application-wide generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppOptions {
    /// Page families to generate.
    pub pages: PageTargets,
    /// Lifetime of issued tokens; `None` leaves the generator default.
    pub token_expire_hours: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageTargets {
    pub pc: bool,
    pub mobile: bool,
    pub dashboard: bool,
}

/// A table to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub comment: Option<String>,
    /// Which row timestamps the generated table maintains.
    pub tracking: RecordTracking,
    /// Columns in storage order.
    pub columns: Vec<ColumnSchema>,
    /// Composite unique constraints, each a list of column names.
    pub unique_constraints: Vec<Vec<String>>,
}

impl TableSchema {
    /// Find a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordTracking {
    pub create_time: bool,
    pub update_time: bool,
    pub delete_time: bool,
}

/// A column to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    pub name: String,
    pub display_name: String,
    pub comment: Option<String>,
    /// Logical value kind.
    pub kind: ValueKind,
    /// Resolved database storage type.
    pub storage: StorageType,
    pub nullable: bool,
    /// Value substituted when the column is absent.
    pub default: Option<String>,
    pub permissions: Permissions,
    pub visibility: Visibility,
    /// Filter matching mode; only set for string columns.
    pub search: Option<SearchMode>,
    /// Whether the column gets its own dedicated update operation.
    pub update_alone: bool,
    /// Allowed values, in declaration order.
    pub enum_values: Vec<EnumValue>,
}

/// Which write and query operations may touch a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Permissions {
    pub creatable: bool,
    pub updatable: bool,
    pub filterable: bool,
}

/// Where a column is shown in generated pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub add: bool,
    pub edit: bool,
    pub list: bool,
    pub detail: bool,
}

/// One allowed value of an enumerated column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub key: EnumKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumKey {
    Int(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str) -> ColumnSchema {
        ColumnSchema {
            name: name.into(),
            display_name: name.into(),
            comment: None,
            kind: ValueKind::String,
            storage: StorageType::Unspecified,
            nullable: true,
            default: None,
            permissions: Permissions::default(),
            visibility: Visibility::default(),
            search: Some(SearchMode::Prefix),
            update_alone: false,
            enum_values: vec![],
        }
    }

    fn schema() -> AppSchema {
        AppSchema {
            meta: AppMeta {
                id: "app".into(),
                name: "shop".into(),
                package: "com.example.shop".into(),
                description: None,
                owner: None,
            },
            options: None,
            tables: vec![
                TableSchema {
                    name: "product".into(),
                    comment: None,
                    tracking: RecordTracking::default(),
                    columns: vec![column("sku"), column("vendor")],
                    unique_constraints: vec![vec!["sku".into(), "vendor".into()]],
                },
                TableSchema {
                    name: "order".into(),
                    comment: None,
                    tracking: RecordTracking::default(),
                    columns: vec![column("number")],
                    unique_constraints: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_lookup() {
        let schema = schema();
        let product = schema.table("product").expect("product table");
        assert!(product.column("vendor").is_some());
        assert!(product.column("number").is_none());
        assert!(schema.table("missing").is_none());
    }

    #[test]
    fn test_counts() {
        let schema = schema();
        assert_eq!(schema.column_count(), 3);
        assert_eq!(schema.constraint_count(), 1);
    }

    #[test]
    fn test_enum_key_serializes_untagged() {
        let value = EnumValue {
            key: EnumKey::Int(1),
            label: "active".into(),
        };
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"key":1,"label":"active"}"#
        );
    }
}
