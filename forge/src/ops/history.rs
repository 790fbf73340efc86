//! History operation - list stored artifacts.

use std::path::Path;

use tableforge_store::{ArtifactStore, StoreResult};

use crate::reports::{ArtifactEntry, HistoryReport};

/// Execute the history operation for one application.
pub fn history(
    artifacts: &dyn ArtifactStore,
    application_id: &str,
    output_dir: &Path,
) -> StoreResult<HistoryReport> {
    let entries = artifacts
        .artifacts(application_id)?
        .into_iter()
        .map(|artifact| ArtifactEntry {
            id: artifact.id.to_string(),
            created_at: artifact.created_at.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string(),
            bytes: artifact.source.len(),
        })
        .collect();

    Ok(HistoryReport {
        application_id: application_id.to_string(),
        output_dir: output_dir.to_path_buf(),
        artifacts: entries,
    })
}
