//! Renewable project endpoints.
//!
//! ```text
//! GET    /api/projects?state=&technology=&status=
//! GET    /api/projects/{id}
//! POST   /api/projects
//! DELETE /api/projects/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use tracing::info;
use utoipa::IntoParams;

use crate::domain::validation::validate_new_project;
use crate::domain::{Error, ProjectFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, NewProjectSchema, ProjectSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    QueryPairs, parse_json_body, record_id_or_not_found, single_query_value, validation_failed,
};

const NOT_FOUND: &str = "Project not found";

/// Optional exact-match filters for the project list.
///
/// A key sent more than once is ignored.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    /// State or union territory, for example `Rajasthan`.
    pub state: Option<String>,
    /// Technology label, for example `Solar`.
    pub technology: Option<String>,
    /// Status label, for example `Under Construction`.
    pub status: Option<String>,
}

impl ProjectQuery {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            state: single_query_value(pairs, "state"),
            technology: single_query_value(pairs, "technology"),
            status: single_query_value(pairs, "status"),
        }
    }
}

impl From<ProjectQuery> for ProjectFilter {
    fn from(query: ProjectQuery) -> Self {
        ProjectFilter::new(query.state, query.technology, query.status)
    }
}

/// List projects, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Matching projects", body = [ProjectSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    query: web::Query<QueryPairs>,
) -> ApiResult<HttpResponse> {
    let filter = ProjectFilter::from(ProjectQuery::from_pairs(&query));
    let projects = state.projects.list().await?;
    Ok(HttpResponse::Ok().json(filter.apply(projects)))
}

/// Fetch one project.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project", body = ProjectSchema),
        (status = 404, description = "Project not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "getProject"
)]
#[get("/projects/{id}")]
pub async fn get_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    let project = state
        .projects
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(project))
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = NewProjectSchema,
    responses(
        (status = 201, description = "Project created", body = ProjectSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let raw = parse_json_body(&body)?;
    let payload = validate_new_project(&raw).map_err(validation_failed)?;
    let project = state.projects.create(payload).await?;
    info!(id = %project.id, name = %project.name, "project created");
    Ok(HttpResponse::Created().json(project))
}

/// Delete a project.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/projects/{id}")]
pub async fn delete_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    if state.projects.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(NOT_FOUND))
    }
}
