//! Port for financing scheme storage.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{FinancingScheme, NewFinancingScheme, RecordId};

/// Storage operations over [`FinancingScheme`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FinancingSchemeRepository: Send + Sync {
    /// Every stored scheme, in the adapter's stable order.
    async fn list(&self) -> Result<Vec<FinancingScheme>, StorageError>;

    /// Look up one scheme by identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<FinancingScheme>, StorageError>;

    /// Store a new scheme, assigning its identifier.
    async fn create(&self, payload: NewFinancingScheme) -> Result<FinancingScheme, StorageError>;

    /// Remove a scheme. Returns `true` when a record was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError>;
}
