//! Port for carbon emission report storage.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{CarbonEmission, NewCarbonEmission, RecordId};

/// Storage operations over [`CarbonEmission`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarbonEmissionRepository: Send + Sync {
    /// Every stored report, in the adapter's stable order.
    async fn list(&self) -> Result<Vec<CarbonEmission>, StorageError>;

    /// Look up one report by identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<CarbonEmission>, StorageError>;

    /// Store a new report, assigning its identifier and creation time.
    async fn create(&self, payload: NewCarbonEmission) -> Result<CarbonEmission, StorageError>;

    /// Remove a report. Returns `true` when a record was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError>;
}
