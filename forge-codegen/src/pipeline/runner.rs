//! Pipeline orchestrator.

use tableforge_store::ConfigStore;
use tracing::debug;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{LoadPhase, LowerPhase, NormalizePhase, ValidatePhase},
};
use crate::CompileError;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (load, normalize, validate, lower) followed by
/// any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run("shop", &store)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self::with_validate(ValidatePhase::new())
    }

    /// Create a pipeline with a custom validate phase.
    pub fn with_validate(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The validate phase, for listing its lints.
    pub fn validate_phase(&self) -> &ValidatePhase {
        &self.validate
    }

    /// Information about every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.all_phases().into_iter().map(|p| p.info()).collect()
    }

    /// Compile one application.
    ///
    /// Nothing is returned on failure: a store error at any table or column
    /// aborts the whole compilation.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin hook fails.
    pub fn run<'a>(
        &self,
        application_id: &str,
        store: &'a dyn ConfigStore,
    ) -> Result<CompilationContext<'a>, CompileError> {
        let mut ctx = CompilationContext::new(application_id, store);

        for phase in self.all_phases() {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn all_phases(&self) -> Vec<&dyn Phase> {
        let mut phases: Vec<&dyn Phase> =
            vec![&LoadPhase, &NormalizePhase, &self.validate, &LowerPhase];
        phases.extend(self.phases.iter().map(|p| p.as_ref() as &dyn Phase));
        phases
    }

    fn run_phase(
        &self,
        phase: &dyn Phase,
        ctx: &mut CompilationContext<'_>,
    ) -> Result<(), CompileError> {
        let phase_name = phase.name();
        debug!(application_id = %ctx.application_id, phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin
                .on_before_phase(phase_name, ctx)
                .map_err(|err| plugin_error(plugin.as_ref(), phase_name, err))?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin
                .on_after_phase(phase_name, ctx)
                .map_err(|err| plugin_error(plugin.as_ref(), phase_name, err))?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn plugin_error(plugin: &dyn Plugin, phase: &'static str, err: eyre::Report) -> CompileError {
    CompileError::Plugin {
        plugin: plugin.name(),
        phase,
        source: err.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use tableforge_core::{Application, TableConfig};
    use tableforge_store::MemoryStore;

    use super::*;
    use crate::ErrorKind;

    struct CountingPlugin {
        before: Arc<AtomicUsize>,
        after: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _: &'static str, _: &mut CompilationContext<'_>) -> eyre::Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _: &'static str, _: &mut CompilationContext<'_>) -> eyre::Result<()> {
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingPlugin;

    impl Plugin for FailingPlugin {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn on_after_phase(&self, phase: &'static str, _: &mut CompilationContext<'_>) -> eyre::Result<()> {
            if phase == "normalize" {
                eyre::bail!("refusing to continue");
            }
            Ok(())
        }
    }

    fn store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_application(Application {
                id: "shop".into(),
                name: "Shop".into(),
                package: "com.example.shop".into(),
                ..Default::default()
            })
            .unwrap();
        store
            .insert_table(TableConfig {
                id: "t1".into(),
                application_id: "shop".into(),
                name: "product".into(),
                ..Default::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let store = store();
        let ctx = Pipeline::new().run("shop", &store).unwrap();

        assert!(ctx.source.is_some());
        let ir = ctx.into_ir().unwrap();
        assert_eq!(ir.tables.len(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let store = store();
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().plugin(CountingPlugin {
            before: before.clone(),
            after: after.clone(),
        });

        pipeline.run("shop", &store).unwrap();

        // 4 built-in phases
        assert_eq!(before.load(Ordering::SeqCst), 4);
        assert_eq!(after.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_plugin_failure_aborts() {
        let store = store();
        let err = Pipeline::new()
            .plugin(FailingPlugin)
            .run("shop", &store)
            .err()
            .unwrap();

        assert!(matches!(
            err,
            CompileError::Plugin {
                plugin: "failing",
                phase: "normalize",
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_phase_info_order() {
        let names: Vec<_> = Pipeline::new()
            .phase_info()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["load", "normalize", "validate", "lower"]);
    }
}
