//! PostgreSQL-backed `CarbonEmissionRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CarbonEmissionRow, NewCarbonEmissionRow};
use super::pool::DbPool;
use super::schema::carbon_emissions;
use crate::domain::ports::{CarbonEmissionRepository, StorageError};
use crate::domain::{CarbonEmission, NewCarbonEmission, RecordId};

/// Diesel implementation of [`CarbonEmissionRepository`].
#[derive(Clone)]
pub struct DieselCarbonEmissionRepository {
    pool: DbPool,
}

impl DieselCarbonEmissionRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarbonEmissionRepository for DieselCarbonEmissionRepository {
    async fn list(&self) -> Result<Vec<CarbonEmission>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CarbonEmissionRow> = carbon_emissions::table
            .order((carbon_emissions::created_at.asc(), carbon_emissions::id.asc()))
            .select(CarbonEmissionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(CarbonEmission::try_from).collect()
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<CarbonEmission>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CarbonEmissionRow> = carbon_emissions::table
            .filter(carbon_emissions::id.eq(*id.as_uuid()))
            .select(CarbonEmissionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(CarbonEmission::try_from).transpose()
    }

    async fn create(&self, payload: NewCarbonEmission) -> Result<CarbonEmission, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CarbonEmissionRow = diesel::insert_into(carbon_emissions::table)
            .values(NewCarbonEmissionRow::from(&payload))
            .returning(CarbonEmissionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        CarbonEmission::try_from(row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed =
            diesel::delete(carbon_emissions::table.filter(carbon_emissions::id.eq(*id.as_uuid())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
