//! Lint trait for configuration validation.

use crate::pipeline::{Diagnostic, SourceConfig};

#[derive(Debug, Clone, Copy)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks loaded configuration rows for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the rows and add any diagnostics.
    fn check(&self, source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
