//! Pipeline phase trait.

use super::CompilationContext;
use crate::CompileError;

/// Information about a pipeline phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Built-in phases, in execution order:
/// - `LoadPhase` - reads configuration rows from the store
/// - `NormalizePhase` - applies the defaulting policy to unset fields
/// - `ValidatePhase` - runs lints and rejects configurations with errors
/// - `LowerPhase` - resolves rows into the application schema
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<(), CompileError>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
