//! Compilation context passed through pipeline phases.

use serde::Serialize;
use tableforge_core::{Application, ApplicationConfig, ColumnConfig, TableConfig};
use tableforge_ir::AppSchema;
use tableforge_store::ConfigStore;

use super::diagnostic::{Diagnostic, Severity};
use crate::CompileError;

/// Configuration rows of one application, as loaded from the store.
#[derive(Debug, Clone, Serialize)]
pub struct SourceConfig {
    pub application: Application,
    pub options: Option<ApplicationConfig>,
    /// Tables in storage order.
    pub tables: Vec<SourceTable>,
}

/// A table row together with its columns in storage order.
#[derive(Debug, Clone, Serialize)]
pub struct SourceTable {
    pub table: TableConfig,
    pub columns: Vec<ColumnConfig>,
}

/// State carried through every phase of one compilation.
pub struct CompilationContext<'a> {
    /// The application being compiled.
    pub application_id: String,
    /// Read-only access to configuration rows.
    pub store: &'a dyn ConfigStore,
    /// Loaded rows (populated by LoadPhase).
    pub source: Option<SourceConfig>,
    /// The compiled schema (populated by LowerPhase).
    pub ir: Option<AppSchema>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CompilationContext<'a> {
    pub fn new(application_id: impl Into<String>, store: &'a dyn ConfigStore) -> Self {
        Self {
            application_id: application_id.into(),
            store,
            source: None,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Borrow the loaded rows, failing if LoadPhase has not run.
    pub fn require_source(&self, phase: &'static str) -> Result<&SourceConfig, CompileError> {
        self.source.as_ref().ok_or(CompileError::Phase {
            phase,
            message: "configuration rows not loaded".into(),
        })
    }

    /// Take the compiled schema out of the context.
    pub fn into_ir(self) -> Result<AppSchema, CompileError> {
        self.ir.ok_or(CompileError::Phase {
            phase: "lower",
            message: "schema not lowered".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tableforge_store::MemoryStore;

    use super::*;

    #[test]
    fn test_context_creation() {
        let store = MemoryStore::new();
        let ctx = CompilationContext::new("shop", &store);

        assert_eq!(ctx.application_id, "shop");
        assert!(ctx.source.is_none());
        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let store = MemoryStore::new();
        let mut ctx = CompilationContext::new("shop", &store);

        ctx.diagnostics.push(Diagnostic::error("validate", "duplicate"));
        ctx.diagnostics.push(Diagnostic::warning("validate", "empty"));
        ctx.diagnostics.push(Diagnostic::info("normalize", "defaulted"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_missing_state_is_an_error() {
        let store = MemoryStore::new();
        let ctx = CompilationContext::new("shop", &store);

        assert!(matches!(
            ctx.require_source("validate"),
            Err(CompileError::Phase { phase: "validate", .. })
        ));
        assert!(matches!(ctx.into_ir(), Err(CompileError::Phase { .. })));
    }
}
