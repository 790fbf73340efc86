//! Lint for columns whose owning application differs from their table's.

use super::super::Lint;
use crate::pipeline::{Diagnostic, SourceConfig, diagnostic::column_location};

/// Lint that warns when a column's `application_id` disagrees with its table.
pub struct OwnerMismatchLint;

impl Lint for OwnerMismatchLint {
    fn name(&self) -> &'static str {
        "owner-mismatch"
    }

    fn description(&self) -> &'static str {
        "Warn about columns owned by a different application than their table"
    }

    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &source.tables {
            let owner = &entry.table.application_id;
            for column in entry.columns.iter().filter(|c| &c.application_id != owner) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column '{}' belongs to application '{}' but its table belongs to '{}'",
                            column.name, column.application_id, owner
                        ),
                    )
                    .code(self.name())
                    .at(column_location(&entry.table.name, &column.name)),
                );
            }
        }
    }
}
