//! Regional capacity endpoints.
//!
//! Lookups go by state name; deletion goes by record id.
//!
//! ```text
//! GET    /api/regional-capacity
//! GET    /api/regional-capacity/{state}
//! POST   /api/regional-capacity
//! DELETE /api/regional-capacity/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use tracing::info;

use crate::domain::Error;
use crate::domain::validation::validate_new_regional_capacity;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, NewRegionalCapacitySchema, RegionalCapacitySchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_json_body, record_id_or_not_found, validation_failed,
};

const STATE_NOT_FOUND: &str = "Regional capacity data not found";
const ID_NOT_FOUND: &str = "Regional capacity not found";

/// List capacity figures for every state.
#[utoipa::path(
    get,
    path = "/api/regional-capacity",
    responses(
        (status = 200, description = "Regional capacity", body = [RegionalCapacitySchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["regional-capacity"],
    operation_id = "listRegionalCapacity"
)]
#[get("/regional-capacity")]
pub async fn list_regional_capacity(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let regions = state.regional_capacity.list().await?;
    Ok(HttpResponse::Ok().json(regions))
}

/// Fetch the capacity figures for one state.
#[utoipa::path(
    get,
    path = "/api/regional-capacity/{state}",
    params(("state" = String, Path, description = "State name, matched exactly")),
    responses(
        (status = 200, description = "Regional capacity", body = RegionalCapacitySchema),
        (status = 404, description = "No figures for the state", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["regional-capacity"],
    operation_id = "getRegionalCapacityByState"
)]
#[get("/regional-capacity/{state}")]
pub async fn get_regional_capacity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let region = state
        .regional_capacity
        .find_by_state(&path)
        .await?
        .ok_or_else(|| Error::not_found(STATE_NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(region))
}

/// Record capacity figures for a state.
#[utoipa::path(
    post,
    path = "/api/regional-capacity",
    request_body = NewRegionalCapacitySchema,
    responses(
        (status = 201, description = "Figures created", body = RegionalCapacitySchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["regional-capacity"],
    operation_id = "createRegionalCapacity"
)]
#[post("/regional-capacity")]
pub async fn create_regional_capacity(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let raw = parse_json_body(&body)?;
    let payload = validate_new_regional_capacity(&raw).map_err(validation_failed)?;
    let region = state.regional_capacity.create(payload).await?;
    info!(id = %region.id, state = %region.state, "regional capacity created");
    Ok(HttpResponse::Created().json(region))
}

/// Delete capacity figures by record id.
#[utoipa::path(
    delete,
    path = "/api/regional-capacity/{id}",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Figures deleted"),
        (status = 404, description = "Regional capacity not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["regional-capacity"],
    operation_id = "deleteRegionalCapacity"
)]
#[delete("/regional-capacity/{id}")]
pub async fn delete_regional_capacity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, ID_NOT_FOUND)?;
    if state.regional_capacity.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(ID_NOT_FOUND))
    }
}
