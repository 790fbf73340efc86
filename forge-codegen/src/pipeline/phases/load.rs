//! Load phase - reads one application's configuration rows.

use tracing::debug;

use crate::{
    CompileError,
    pipeline::{CompilationContext, Phase, SourceConfig, SourceTable},
};

/// Phase that fetches the application, its settings, its tables and their
/// columns, in storage order.
pub struct LoadPhase;

impl Phase for LoadPhase {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "Fetch application, table and column rows from the store"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<(), CompileError> {
        let app_id = ctx.application_id.as_str();
        if app_id.trim().is_empty() {
            return Err(CompileError::validation("application id is required"));
        }

        let store = ctx.store;
        let application = store
            .fetch_application(app_id)
            .map_err(|err| CompileError::store(app_id, err))?
            .ok_or_else(|| CompileError::NotFound {
                application_id: app_id.to_string(),
            })?;
        let options = store
            .fetch_application_config(app_id)
            .map_err(|err| CompileError::store(app_id, err))?;
        let rows = store
            .fetch_tables(app_id)
            .map_err(|err| CompileError::store(app_id, err))?;

        let mut tables = Vec::with_capacity(rows.len());
        for table in rows {
            if table.id.trim().is_empty() {
                return Err(CompileError::validation(format!(
                    "table '{}' has no id",
                    table.name
                )));
            }
            let columns = store
                .fetch_columns(&table.id)
                .map_err(|err| CompileError::store(app_id, err))?;
            if let Some(column) = columns.iter().find(|c| c.name.trim().is_empty()) {
                return Err(CompileError::validation(format!(
                    "column '{}' of table '{}' has no name",
                    column.id, table.name
                )));
            }
            tables.push(SourceTable { table, columns });
        }

        debug!(application_id = app_id, tables = tables.len(), "loaded configuration");
        ctx.source = Some(SourceConfig {
            application,
            options,
            tables,
        });
        Ok(())
    }
}
