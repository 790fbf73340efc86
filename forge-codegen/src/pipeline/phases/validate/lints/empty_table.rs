//! Lint for tables without columns.

use super::super::Lint;
use crate::pipeline::{Diagnostic, SourceConfig, diagnostic::table_location};

pub struct EmptyTableLint;

impl Lint for EmptyTableLint {
    fn name(&self) -> &'static str {
        "empty-table"
    }

    fn description(&self) -> &'static str {
        "Warn about tables that declare no columns"
    }

    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) {
        for entry in source.tables.iter().filter(|t| t.columns.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("table '{}' has no columns", entry.table.name),
                )
                .code(self.name())
                .at(table_location(&entry.table.name)),
            );
        }
    }
}
