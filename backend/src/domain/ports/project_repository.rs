//! Port for renewable project storage.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{NewProject, Project, RecordId};

/// Storage operations over [`Project`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Every stored project, in the adapter's stable order.
    async fn list(&self) -> Result<Vec<Project>, StorageError>;

    /// Look up one project by identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Project>, StorageError>;

    /// Store a new project, assigning its identifier and creation time.
    async fn create(&self, payload: NewProject) -> Result<Project, StorageError>;

    /// Remove a project. Returns `true` when a record was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError>;
}
