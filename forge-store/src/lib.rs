//! Store interfaces for tableforge.
//!
//! The schema compiler reads configuration rows through [`ConfigStore`] and
//! the generation gateway appends artifacts through [`ArtifactStore`]. The
//! relational backend lives outside this workspace; [`MemoryStore`] and
//! [`DirArtifactStore`] cover fixtures, tests and the command line.

mod dir;
mod error;
mod memory;

pub use dir::DirArtifactStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
use tableforge_core::{
    Application, ApplicationConfig, ApplicationSource, ArtifactId, ColumnConfig, TableConfig,
};

/// Read access to stored configuration rows.
///
/// Implementations must return rows in insertion order. The compiler does
/// not re-sort, so column order and unique-constraint order in the compiled
/// schema follow whatever order the store yields.
pub trait ConfigStore: Send + Sync {
    /// Get an application by ID.
    fn fetch_application(&self, id: &str) -> StoreResult<Option<Application>>;

    /// Get the generation settings of an application, if any.
    fn fetch_application_config(
        &self,
        application_id: &str,
    ) -> StoreResult<Option<ApplicationConfig>>;

    /// List the tables of an application.
    fn fetch_tables(&self, application_id: &str) -> StoreResult<Vec<TableConfig>>;

    /// List the columns of a table.
    fn fetch_columns(&self, table_id: &str) -> StoreResult<Vec<ColumnConfig>>;
}

/// Append-only storage for generated artifacts.
pub trait ArtifactStore: Send + Sync {
    /// Persist a new artifact for an application.
    fn insert_artifact(&self, application_id: &str, source: Vec<u8>) -> StoreResult<ArtifactId>;

    /// List the artifacts of an application in insertion order.
    fn artifacts(&self, application_id: &str) -> StoreResult<Vec<ApplicationSource>>;

    /// The most recent artifact of an application.
    ///
    /// Picks the latest creation timestamp; ties go to the later insertion.
    fn latest(&self, application_id: &str) -> StoreResult<Option<ApplicationSource>> {
        Ok(self
            .artifacts(application_id)?
            .into_iter()
            .max_by_key(|artifact| artifact.created_at))
    }
}
