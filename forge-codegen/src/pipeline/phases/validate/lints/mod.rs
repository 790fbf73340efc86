//! Built-in lints for configuration validation.

mod decimal_without_length;
mod duplicate_column;
mod empty_table;
mod owner_mismatch;
mod unknown_column_type;

pub use decimal_without_length::DecimalWithoutLengthLint;
pub use duplicate_column::DuplicateColumnLint;
pub use empty_table::EmptyTableLint;
pub use owner_mismatch::OwnerMismatchLint;
pub use unknown_column_type::UnknownColumnTypeLint;

#[cfg(test)]
pub(crate) mod fixtures {
    use tableforge_core::{ColumnConfig, TableConfig};

    use crate::pipeline::{SourceConfig, SourceTable};

    pub fn table(name: &str, columns: Vec<ColumnConfig>) -> SourceTable {
        SourceTable {
            table: TableConfig {
                id: name.into(),
                application_id: "shop".into(),
                name: name.into(),
                ..Default::default()
            },
            columns,
        }
    }

    pub fn column(name: &str) -> ColumnConfig {
        ColumnConfig {
            id: name.into(),
            application_id: "shop".into(),
            name: name.into(),
            column_type: 1,
            ..Default::default()
        }
    }

    pub fn source(tables: Vec<SourceTable>) -> SourceConfig {
        SourceConfig {
            application: Default::default(),
            options: None,
            tables,
        }
    }
}
