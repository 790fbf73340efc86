//! Directory-backed artifact store.
//!
//! Layout: `<root>/<application_id>/<created_at_millis>-<artifact_id>.bin`.
//! Artifacts are written to a temporary file and renamed into place, so a
//! reader never observes a partially written artifact.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SubsecRound, Utc};
use tableforge_core::{ApplicationSource, ArtifactId};
use uuid::Uuid;

use crate::{ArtifactStore, StoreError, StoreResult};

const EXTENSION: &str = "bin";

/// Artifact store writing one file per artifact under a root directory.
#[derive(Debug, Clone)]
pub struct DirArtifactStore {
    root: PathBuf,
}

impl DirArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding a given artifact.
    pub fn artifact_path(&self, artifact: &ApplicationSource) -> StoreResult<PathBuf> {
        Ok(self.app_dir(&artifact.application_id)?.join(file_name(artifact)))
    }

    fn app_dir(&self, application_id: &str) -> StoreResult<PathBuf> {
        if !is_safe_component(application_id) {
            return Err(StoreError::InvalidKey {
                key: application_id.to_string(),
            });
        }
        Ok(self.root.join(application_id))
    }
}

impl ArtifactStore for DirArtifactStore {
    fn insert_artifact(&self, application_id: &str, source: Vec<u8>) -> StoreResult<ArtifactId> {
        let dir = self.app_dir(application_id)?;
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut artifact = ApplicationSource::new(application_id, source);
        // file names keep milliseconds only
        artifact.created_at = artifact.created_at.trunc_subsecs(3);
        let path = self.artifact_path(&artifact)?;
        write_atomically(&path, &artifact.source).map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(path = %path.display(), bytes = artifact.source.len(), "artifact written");
        Ok(artifact.id)
    }

    fn artifacts(&self, application_id: &str) -> StoreResult<Vec<ApplicationSource>> {
        let dir = self.app_dir(application_id)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| StoreError::io(&dir, e))?;
        let mut artifacts = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir, e))?.path();
            let Some((created_at, id)) = parse_file_name(&path) else {
                continue;
            };
            let source = fs::read(&path).map_err(|e| StoreError::io(&path, e))?;
            artifacts.push(ApplicationSource {
                id,
                application_id: application_id.to_string(),
                source,
                created_at,
            });
        }

        // v7 ids are time-ordered, so they break ties within a millisecond
        artifacts.sort_by_key(|a| (a.created_at, a.id));
        Ok(artifacts)
    }
}

/// Write through a sibling `.tmp` file, removing it if either step fails.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    let written = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn file_name(artifact: &ApplicationSource) -> String {
    format!(
        "{}-{}.{}",
        artifact.created_at.timestamp_millis(),
        artifact.id,
        EXTENSION
    )
}

fn parse_file_name(path: &Path) -> Option<(DateTime<Utc>, ArtifactId)> {
    if path.extension()? != EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (millis, id) = stem.split_once('-')?;
    let created_at = DateTime::from_timestamp_millis(millis.parse().ok()?)?;
    let id = Uuid::parse_str(id).ok()?;
    Some((created_at, ArtifactId::from_uuid(id)))
}

fn is_safe_component(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains('\0')
}
