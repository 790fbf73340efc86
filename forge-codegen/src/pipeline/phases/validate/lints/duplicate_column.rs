//! Lint for duplicate column names within a table.

use std::collections::HashMap;

use super::super::Lint;
use crate::pipeline::{Diagnostic, SourceConfig, diagnostic::column_location};

/// Lint that warns when two columns of one table share a name.
pub struct DuplicateColumnLint;

impl Lint for DuplicateColumnLint {
    fn name(&self) -> &'static str {
        "duplicate-column"
    }

    fn description(&self) -> &'static str {
        "Detect columns declared twice in the same table"
    }

    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &source.tables {
            let mut seen: HashMap<&str, &str> = HashMap::new();
            for column in &entry.columns {
                if let Some(first) = seen.get(column.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "duplicate column '{}' (conflicts with column id '{}')",
                                column.name, first
                            ),
                        )
                        .code(self.name())
                        .at(column_location(&entry.table.name, &column.name)),
                    );
                } else {
                    seen.insert(&column.name, &column.id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::fixtures::{column, source, table};

    #[test]
    fn test_duplicate_in_one_table() {
        let source = source(vec![table(
            "product",
            vec![column("sku"), column("name"), column("sku")],
        )]);
        let mut diagnostics = Vec::new();
        DuplicateColumnLint.check(&source, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("tables.product.columns.sku")
        );
    }

    #[test]
    fn test_same_name_across_tables() {
        let source = source(vec![
            table("product", vec![column("id")]),
            table("order", vec![column("id")]),
        ]);
        let mut diagnostics = Vec::new();
        DuplicateColumnLint.check(&source, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
