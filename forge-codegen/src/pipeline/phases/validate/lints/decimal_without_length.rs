//! Lint for numeric columns with a scale but no precision.

use tableforge_core::ColumnType;

use super::super::Lint;
use crate::pipeline::{Diagnostic, SourceConfig, diagnostic::column_location};

/// Lint that warns when `decimal_length` is set without `column_length`.
///
/// The column still resolves to a decimal, with a precision of zero.
pub struct DecimalWithoutLengthLint;

impl Lint for DecimalWithoutLengthLint {
    fn name(&self) -> &'static str {
        "decimal-without-length"
    }

    fn description(&self) -> &'static str {
        "Warn about decimal scales declared without a column length"
    }

    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &source.tables {
            let suspicious = entry.columns.iter().filter(|c| {
                c.column_type() == ColumnType::Number && c.decimal_length > 0 && c.column_length <= 0
            });
            for column in suspicious {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column '{}' has decimal_length {} but no column_length",
                            column.name, column.decimal_length
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
    fn test_scale_without_precision() {
        let mut price = column("price");
        price.column_type = 2;
        price.decimal_length = 2;
        let mut total = column("total");
        total.column_type = 2;
        total.decimal_length = 2;
        total.column_length = 10;
        let source = source(vec![table("order", vec![price, total])]);

        let mut diagnostics = Vec::new();
        DecimalWithoutLengthLint.check(&source, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("tables.order.columns.price")
        );
    }
}
