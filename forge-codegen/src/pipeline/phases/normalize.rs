//! Normalize phase - applies the defaulting policy once, before resolution.

use tableforge_core::defaults::{AppliedDefault, apply_column_defaults, apply_table_defaults};

use crate::{
    CompileError,
    pipeline::{
        CompilationContext, Diagnostic, Phase,
        diagnostic::{column_location, table_location},
    },
};

/// Phase that fills unset (`0`) table and column fields with their defaults.
///
/// Every applied default is recorded as an info diagnostic.
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Apply defaults to unset table and column fields"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<(), CompileError> {
        let Some(source) = ctx.source.as_mut() else {
            return Err(CompileError::Phase {
                phase: self.name(),
                message: "configuration rows not loaded".into(),
            });
        };

        for entry in &mut source.tables {
            let table_name = entry.table.name.clone();
            let applied = apply_table_defaults(&mut entry.table);
            record(&mut ctx.diagnostics, applied, || table_location(&table_name));

            for column in &mut entry.columns {
                let applied = apply_column_defaults(column);
                record(&mut ctx.diagnostics, applied, || {
                    column_location(&table_name, &column.name)
                });
            }
        }
        Ok(())
    }
}

fn record(
    diagnostics: &mut Vec<Diagnostic>,
    applied: Vec<AppliedDefault>,
    location: impl Fn() -> String,
) {
    for default in applied {
        diagnostics.push(
            Diagnostic::info(
                "normalize",
                format!("{} defaulted to {}", default.field, default.value),
            )
            .at(location()),
        );
    }
}

#[cfg(test)]
mod tests {
    use tableforge_core::{ColumnConfig, RecordFlags, TableConfig, UpdateFlags};
    use tableforge_store::MemoryStore;

    use super::*;
    use crate::pipeline::{SourceConfig, SourceTable};

    #[test]
    fn test_defaults_are_applied_and_recorded() {
        let store = MemoryStore::new();
        let mut ctx = CompilationContext::new("shop", &store);
        ctx.source = Some(SourceConfig {
            application: Default::default(),
            options: None,
            tables: vec![SourceTable {
                table: TableConfig {
                    name: "product".into(),
                    ..Default::default()
                },
                columns: vec![ColumnConfig {
                    name: "sku".into(),
                    column_type: 2,
                    update_type: UpdateFlags::new(UpdateFlags::CREATE),
                    ..Default::default()
                }],
            }],
        });

        NormalizePhase.run(&mut ctx).unwrap();

        let source = ctx.source.as_ref().unwrap();
        assert_eq!(source.tables[0].table.record_type, RecordFlags::new(1));
        let column = &source.tables[0].columns[0];
        assert_eq!(column.column_type, 2);
        assert_eq!(column.update_type.bits(), UpdateFlags::CREATE);
        assert_eq!(column.string_type, 1);
        assert_eq!(column.string_search, 1);

        let messages: Vec<_> = ctx.diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "info: record_type defaulted to 1 (at tables.product)",
                "info: string_type defaulted to 1 (at tables.product.columns.sku)",
                "info: string_search defaulted to 1 (at tables.product.columns.sku)",
            ]
        );
    }

    #[test]
    fn test_requires_loaded_rows() {
        let store = MemoryStore::new();
        let mut ctx = CompilationContext::new("shop", &store);
        assert!(NormalizePhase.run(&mut ctx).is_err());
    }
}
