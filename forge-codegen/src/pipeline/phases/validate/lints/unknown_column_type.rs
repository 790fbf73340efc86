//! Lint for unrecognized column type codes.

use super::super::Lint;
use crate::pipeline::{Diagnostic, SourceConfig, diagnostic::column_location};

/// Lint that warns about type codes the resolver passes through untouched.
pub struct UnknownColumnTypeLint;

impl Lint for UnknownColumnTypeLint {
    fn name(&self) -> &'static str {
        "unknown-column-type"
    }

    fn description(&self) -> &'static str {
        "Warn about column type codes left to the generator's fallback"
    }

    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &source.tables {
            for column in &entry.columns {
                if column.column_type().is_known() {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column '{}' has unknown type code {}",
                            column.name, column.column_type
                        ),
                    )
                    .code(self.name())
                    .at(column_location(&entry.table.name, &column.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::fixtures::{column, source, table};

    #[test]
    fn test_unknown_code() {
        let mut odd = column("blob");
        odd.column_type = 9;
        let mut stamp = column("created");
        stamp.column_type = 3;
        let source = source(vec![table("file", vec![odd, stamp])]);

        let mut diagnostics = Vec::new();
        UnknownColumnTypeLint.check(&source, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "column 'blob' has unknown type code 9"
        );
    }
}
