//! Validate phase - runs lints on the loaded configuration.

mod lint;
pub mod lints;

pub use lint::{Lint, LintInfo};
pub use lints::{
    DecimalWithoutLengthLint, DuplicateColumnLint, EmptyTableLint, OwnerMismatchLint,
    UnknownColumnTypeLint,
};

use crate::{
    CompileError,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates configuration rows using configurable lints.
///
/// Warnings are kept as diagnostics; any error rejects the application.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateColumnLint),
                Box::new(OwnerMismatchLint),
                Box::new(UnknownColumnTypeLint),
                Box::new(EmptyTableLint),
                Box::new(DecimalWithoutLengthLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check configuration integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<(), CompileError> {
        let source = ctx.require_source(self.name())?;

        let mut found = Vec::new();
        for lint in &self.lints {
            lint.check(source, &mut found);
        }
        ctx.diagnostics.extend(found);

        if ctx.has_errors() {
            return Err(CompileError::Rejected {
                application_id: ctx.application_id.clone(),
                diagnostics: ctx.diagnostics.clone(),
            });
        }
        Ok(())
    }
}
