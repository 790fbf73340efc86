//! In-memory store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tableforge_core::{
    Application, ApplicationConfig, ApplicationSource, ArtifactId, ColumnConfig, TableConfig,
};

use crate::{ArtifactStore, ConfigStore, StoreError, StoreResult};

/// Store backed by insertion-ordered vectors.
///
/// Cloning is cheap and clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    applications: Arc<RwLock<Vec<Application>>>,
    application_configs: Arc<RwLock<Vec<ApplicationConfig>>>,
    tables: Arc<RwLock<Vec<TableConfig>>>,
    columns: Arc<RwLock<Vec<ColumnConfig>>>,
    artifacts: Arc<RwLock<Vec<ApplicationSource>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_application(&self, application: Application) -> StoreResult<()> {
        let mut applications = write(&self.applications)?;
        if applications.iter().any(|a| a.id == application.id) {
            return Err(StoreError::Duplicate {
                entity: "application",
                id: application.id,
            });
        }
        applications.push(application);
        Ok(())
    }

    /// Insert or replace the settings of an application.
    pub fn upsert_application_config(&self, config: ApplicationConfig) -> StoreResult<()> {
        let mut configs = write(&self.application_configs)?;
        match configs
            .iter_mut()
            .find(|c| c.application_id == config.application_id)
        {
            Some(existing) => *existing = config,
            None => configs.push(config),
        }
        Ok(())
    }

    pub fn insert_table(&self, table: TableConfig) -> StoreResult<()> {
        let mut tables = write(&self.tables)?;
        if tables.iter().any(|t| t.id == table.id) {
            return Err(StoreError::Duplicate {
                entity: "table",
                id: table.id,
            });
        }
        tables.push(table);
        Ok(())
    }

    pub fn insert_column(&self, column: ColumnConfig) -> StoreResult<()> {
        let mut columns = write(&self.columns)?;
        if columns.iter().any(|c| c.id == column.id) {
            return Err(StoreError::Duplicate {
                entity: "column",
                id: column.id,
            });
        }
        columns.push(column);
        Ok(())
    }

    /// List all applications in insertion order.
    pub fn applications(&self) -> StoreResult<Vec<Application>> {
        Ok(read(&self.applications)?.clone())
    }

    /// Number of artifacts stored across all applications.
    pub fn artifact_count(&self) -> StoreResult<usize> {
        Ok(read(&self.artifacts)?.len())
    }
}

impl ConfigStore for MemoryStore {
    fn fetch_application(&self, id: &str) -> StoreResult<Option<Application>> {
        Ok(read(&self.applications)?.iter().find(|a| a.id == id).cloned())
    }

    fn fetch_application_config(
        &self,
        application_id: &str,
    ) -> StoreResult<Option<ApplicationConfig>> {
        Ok(read(&self.application_configs)?
            .iter()
            .find(|c| c.application_id == application_id)
            .cloned())
    }

    fn fetch_tables(&self, application_id: &str) -> StoreResult<Vec<TableConfig>> {
        Ok(read(&self.tables)?
            .iter()
            .filter(|t| t.application_id == application_id)
            .cloned()
            .collect())
    }

    fn fetch_columns(&self, table_id: &str) -> StoreResult<Vec<ColumnConfig>> {
        Ok(read(&self.columns)?
            .iter()
            .filter(|c| c.table_id == table_id)
            .cloned()
            .collect())
    }
}

impl ArtifactStore for MemoryStore {
    fn insert_artifact(&self, application_id: &str, source: Vec<u8>) -> StoreResult<ArtifactId> {
        let artifact = ApplicationSource::new(application_id, source);
        let id = artifact.id;
        write(&self.artifacts)?.push(artifact);
        Ok(id)
    }

    fn artifacts(&self, application_id: &str) -> StoreResult<Vec<ApplicationSource>> {
        Ok(read(&self.artifacts)?
            .iter()
            .filter(|a| a.application_id == application_id)
            .cloned()
            .collect())
    }
}

fn read<T>(lock: &RwLock<T>) -> StoreResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| StoreError::unavailable("memory store lock poisoned"))
}

fn write<T>(lock: &RwLock<T>) -> StoreResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| StoreError::unavailable("memory store lock poisoned"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: &str, app: &str) -> TableConfig {
        TableConfig {
            id: id.into(),
            application_id: app.into(),
            name: id.into(),
            ..Default::default()
        }
    }

    fn column(id: &str, table: &str) -> ColumnConfig {
        ColumnConfig {
            id: id.into(),
            application_id: "app".into(),
            table_id: table.into(),
            name: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert_table(table("zeta", "app")).unwrap();
        store.insert_table(table("other", "elsewhere")).unwrap();
        store.insert_table(table("alpha", "app")).unwrap();

        let names: Vec<_> = store
            .fetch_tables("app")
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_fetch_columns_filters_by_table() {
        let store = MemoryStore::new();
        store.insert_column(column("b", "t1")).unwrap();
        store.insert_column(column("x", "t2")).unwrap();
        store.insert_column(column("a", "t1")).unwrap();

        let names: Vec<_> = store
            .fetch_columns("t1")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let store = MemoryStore::new();
        store.insert_table(table("t1", "app")).unwrap();
        let err = store.insert_table(table("t1", "app")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { entity: "table", .. }));
    }

    #[test]
    fn test_missing_application() {
        let store = MemoryStore::new();
        assert!(store.fetch_application("nope").unwrap().is_none());
    }

    #[test]
    fn test_upsert_application_config_replaces() {
        let store = MemoryStore::new();
        store
            .upsert_application_config(ApplicationConfig {
                application_id: "app".into(),
                token_expire_hours: 1,
                ..Default::default()
            })
            .unwrap();
        store
            .upsert_application_config(ApplicationConfig {
                application_id: "app".into(),
                token_expire_hours: 24,
                ..Default::default()
            })
            .unwrap();

        let config = store.fetch_application_config("app").unwrap().unwrap();
        assert_eq!(config.token_expire_hours, 24);
    }

    #[test]
    fn test_artifacts_are_append_only() {
        let store = MemoryStore::new();
        let first = store.insert_artifact("app", b"one".to_vec()).unwrap();
        let second = store.insert_artifact("app", b"two".to_vec()).unwrap();
        store.insert_artifact("other", b"x".to_vec()).unwrap();

        let artifacts = store.artifacts("app").unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].id, first);
        assert_eq!(artifacts[1].id, second);
        assert_eq!(store.artifact_count().unwrap(), 3);

        let latest = store.latest("app").unwrap().unwrap();
        assert_eq!(latest.source, b"two");
    }

    #[test]
    fn test_clones_share_data() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone
            .insert_application(Application {
                id: "app".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(store.fetch_application("app").unwrap().is_some());
    }

    #[test]
    fn test_poisoned_lock_is_unavailable() {
        let store = MemoryStore::new();
        let clone = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.artifacts.write().unwrap();
            panic!("writer died");
        })
        .join();

        let err = store.artifact_count().unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(store.artifacts("app").is_err());
    }
}
