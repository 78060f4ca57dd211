//! PostgreSQL-backed `FinancingSchemeRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FinancingSchemeRow, NewFinancingSchemeRow};
use super::pool::DbPool;
use super::schema::financing_schemes;
use crate::domain::ports::{FinancingSchemeRepository, StorageError};
use crate::domain::{FinancingScheme, NewFinancingScheme, RecordId};

/// Diesel implementation of [`FinancingSchemeRepository`].
#[derive(Clone)]
pub struct DieselFinancingSchemeRepository {
    pool: DbPool,
}

impl DieselFinancingSchemeRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FinancingSchemeRepository for DieselFinancingSchemeRepository {
    async fn list(&self) -> Result<Vec<FinancingScheme>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<FinancingSchemeRow> = financing_schemes::table
            .order((financing_schemes::created_at.asc(), financing_schemes::id.asc()))
            .select(FinancingSchemeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(FinancingScheme::try_from).collect()
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<FinancingScheme>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<FinancingSchemeRow> = financing_schemes::table
            .filter(financing_schemes::id.eq(*id.as_uuid()))
            .select(FinancingSchemeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(FinancingScheme::try_from).transpose()
    }

    async fn create(&self, payload: NewFinancingScheme) -> Result<FinancingScheme, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: FinancingSchemeRow = diesel::insert_into(financing_schemes::table)
            .values(NewFinancingSchemeRow::from(&payload))
            .returning(FinancingSchemeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        FinancingScheme::try_from(row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            financing_schemes::table.filter(financing_schemes::id.eq(*id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
