//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs. Returning an
/// error from a hook aborts the compilation.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for error reports and logging).
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &'static str, ctx: &mut CompilationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &'static str, ctx: &mut CompilationContext<'_>) -> Result<()> {
        Ok(())
    }
}
