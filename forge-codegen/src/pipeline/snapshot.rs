//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the compilation state after each phase so the intermediate
//! forms (loaded rows, normalized rows, compiled schema) can be inspected.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Result, WrapErr};
use serde::Serialize;
use tableforge_ir::AppSchema;

use super::{CompilationContext, Diagnostic, Plugin, SourceConfig};

/// The compilation state at the end of one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Configuration rows (available after "load").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,

    /// The compiled schema (available after "lower").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<AppSchema>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `forge bake --visualize`. When an output directory is set, each
/// snapshot is also written as `<dir>/<index>-<phase>.json` as soon as the
/// phase completes.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All snapshots collected so far.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_snapshot(dir: &Path, index: usize, snapshot: &PhaseSnapshot) -> Result<()> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(format!("{index}-{}.json", snapshot.phase));
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &'static str, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            source: ctx.source.clone(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        let mut snapshots = self
            .snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(dir) = &self.output_dir {
            Self::write_snapshot(dir, snapshots.len(), &snapshot)?;
        }
        snapshots.push(snapshot);

        Ok(())
    }
}
