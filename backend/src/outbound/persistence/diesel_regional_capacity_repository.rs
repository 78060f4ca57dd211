//! PostgreSQL-backed `RegionalCapacityRepository`.
//!
//! The table carries a unique constraint on `state`, so a second insert for
//! the same state fails with `StorageError::Conflict`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRegionalCapacityRow, RegionalCapacityRow};
use super::pool::DbPool;
use super::schema::regional_capacity;
use crate::domain::ports::{RegionalCapacityRepository, StorageError};
use crate::domain::{NewRegionalCapacity, RecordId, RegionalCapacity};

/// Diesel implementation of [`RegionalCapacityRepository`].
#[derive(Clone)]
pub struct DieselRegionalCapacityRepository {
    pool: DbPool,
}

impl DieselRegionalCapacityRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionalCapacityRepository for DieselRegionalCapacityRepository {
    async fn list(&self) -> Result<Vec<RegionalCapacity>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RegionalCapacityRow> = regional_capacity::table
            .order((regional_capacity::created_at.asc(), regional_capacity::id.asc()))
            .select(RegionalCapacityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(RegionalCapacity::from).collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<RegionalCapacity>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<RegionalCapacityRow> = regional_capacity::table
            .filter(regional_capacity::id.eq(*id.as_uuid()))
            .select(RegionalCapacityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(RegionalCapacity::from))
    }

    async fn find_by_state(&self, state: &str) -> Result<Option<RegionalCapacity>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<RegionalCapacityRow> = regional_capacity::table
            .filter(regional_capacity::state.eq(state))
            .select(RegionalCapacityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(RegionalCapacity::from))
    }

    async fn create(
        &self,
        payload: NewRegionalCapacity,
    ) -> Result<RegionalCapacity, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: RegionalCapacityRow = diesel::insert_into(regional_capacity::table)
            .values(NewRegionalCapacityRow::from(&payload))
            .returning(RegionalCapacityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(RegionalCapacity::from(row))
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            regional_capacity::table.filter(regional_capacity::id.eq(*id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
