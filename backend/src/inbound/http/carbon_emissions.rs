//! Carbon emission report endpoints.
//!
//! ```text
//! GET    /api/carbon-emissions
//! GET    /api/carbon-emissions/{id}
//! POST   /api/carbon-emissions
//! DELETE /api/carbon-emissions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use tracing::info;

use crate::domain::Error;
use crate::domain::validation::validate_new_carbon_emission;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CarbonEmissionSchema, ErrorSchema, NewCarbonEmissionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_json_body, record_id_or_not_found, validation_failed,
};

const NOT_FOUND: &str = "Emission record not found";

/// List every emission report.
#[utoipa::path(
    get,
    path = "/api/carbon-emissions",
    responses(
        (status = 200, description = "Emission reports", body = [CarbonEmissionSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["carbon-emissions"],
    operation_id = "listCarbonEmissions"
)]
#[get("/carbon-emissions")]
pub async fn list_carbon_emissions(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let reports = state.carbon_emissions.list().await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// Fetch one emission report.
#[utoipa::path(
    get,
    path = "/api/carbon-emissions/{id}",
    params(("id" = String, Path, description = "Report identifier")),
    responses(
        (status = 200, description = "Emission report", body = CarbonEmissionSchema),
        (status = 404, description = "Emission record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["carbon-emissions"],
    operation_id = "getCarbonEmission"
)]
#[get("/carbon-emissions/{id}")]
pub async fn get_carbon_emission(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    let report = state
        .carbon_emissions
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(report))
}

/// Record an emission report.
#[utoipa::path(
    post,
    path = "/api/carbon-emissions",
    request_body = NewCarbonEmissionSchema,
    responses(
        (status = 201, description = "Report created", body = CarbonEmissionSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["carbon-emissions"],
    operation_id = "createCarbonEmission"
)]
#[post("/carbon-emissions")]
pub async fn create_carbon_emission(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let raw = parse_json_body(&body)?;
    let payload = validate_new_carbon_emission(&raw).map_err(validation_failed)?;
    let report = state.carbon_emissions.create(payload).await?;
    info!(
        id = %report.id,
        organization = %report.organization_name,
        "emission report created"
    );
    Ok(HttpResponse::Created().json(report))
}

/// Delete an emission report.
#[utoipa::path(
    delete,
    path = "/api/carbon-emissions/{id}",
    params(("id" = String, Path, description = "Report identifier")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 404, description = "Emission record not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["carbon-emissions"],
    operation_id = "deleteCarbonEmission"
)]
#[delete("/carbon-emissions/{id}")]
pub async fn delete_carbon_emission(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    if state.carbon_emissions.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(NOT_FOUND))
    }
}
