//! PostgreSQL-backed `ProjectRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProjectRow, ProjectRow};
use super::pool::DbPool;
use super::schema::renewable_projects;
use crate::domain::ports::{ProjectRepository, StorageError};
use crate::domain::{NewProject, Project, RecordId};

/// Diesel implementation of [`ProjectRepository`].
///
/// Listings are ordered by `created_at`, then `id`.
#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProjectRow> = renewable_projects::table
            .order((
                renewable_projects::created_at.asc(),
                renewable_projects::id.asc(),
            ))
            .select(ProjectRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(Project::try_from).collect()
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Project>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ProjectRow> = renewable_projects::table
            .filter(renewable_projects::id.eq(*id.as_uuid()))
            .select(ProjectRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Project::try_from).transpose()
    }

    async fn create(&self, payload: NewProject) -> Result<Project, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ProjectRow = diesel::insert_into(renewable_projects::table)
            .values(NewProjectRow::from(&payload))
            .returning(ProjectRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Project::try_from(row)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            renewable_projects::table.filter(renewable_projects::id.eq(*id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
