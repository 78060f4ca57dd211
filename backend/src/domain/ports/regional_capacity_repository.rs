//! Port for regional capacity storage.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{NewRegionalCapacity, RecordId, RegionalCapacity};

/// Storage operations over [`RegionalCapacity`] records.
///
/// Lookups are by `state` while deletes are by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionalCapacityRepository: Send + Sync {
    /// Every stored region, in the adapter's stable order.
    async fn list(&self) -> Result<Vec<RegionalCapacity>, StorageError>;

    /// Look up one region by identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<RegionalCapacity>, StorageError>;

    /// Look up a region by exact, case-sensitive state name.
    ///
    /// When several records share a state, the earliest stored one wins.
    async fn find_by_state(&self, state: &str) -> Result<Option<RegionalCapacity>, StorageError>;

    /// Store a new region, assigning its identifier.
    ///
    /// The durable adapter rejects a duplicate state with
    /// [`StorageError::Conflict`]; the in-memory adapter accepts it.
    async fn create(&self, payload: NewRegionalCapacity)
    -> Result<RegionalCapacity, StorageError>;

    /// Remove a region. Returns `true` when a record was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError>;
}
