//! Financing scheme endpoints.
//!
//! ```text
//! GET    /api/financing-schemes?category=
//! GET    /api/financing-schemes/{id}
//! POST   /api/financing-schemes
//! DELETE /api/financing-schemes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use tracing::info;
use utoipa::IntoParams;

use crate::domain::validation::validate_new_financing_scheme;
use crate::domain::{Error, SchemeFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FinancingSchemeSchema, NewFinancingSchemeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    QueryPairs, parse_json_body, record_id_or_not_found, single_query_value, validation_failed,
};

const NOT_FOUND: &str = "Financing scheme not found";

/// Optional category filter for the scheme list.
///
/// A repeated `category` key is ignored.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchemeQuery {
    /// Category label, for example `Tax Incentives`.
    pub category: Option<String>,
}

impl SchemeQuery {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            category: single_query_value(pairs, "category"),
        }
    }
}

/// List financing schemes, optionally by category.
#[utoipa::path(
    get,
    path = "/api/financing-schemes",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Matching schemes", body = [FinancingSchemeSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["financing-schemes"],
    operation_id = "listFinancingSchemes"
)]
#[get("/financing-schemes")]
pub async fn list_financing_schemes(
    state: web::Data<HttpState>,
    query: web::Query<QueryPairs>,
) -> ApiResult<HttpResponse> {
    let filter = SchemeFilter::new(SchemeQuery::from_pairs(&query).category);
    let schemes = state.financing_schemes.list().await?;
    Ok(HttpResponse::Ok().json(filter.apply(schemes)))
}

/// Fetch one financing scheme.
#[utoipa::path(
    get,
    path = "/api/financing-schemes/{id}",
    params(("id" = String, Path, description = "Scheme identifier")),
    responses(
        (status = 200, description = "Financing scheme", body = FinancingSchemeSchema),
        (status = 404, description = "Financing scheme not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["financing-schemes"],
    operation_id = "getFinancingScheme"
)]
#[get("/financing-schemes/{id}")]
pub async fn get_financing_scheme(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    let scheme = state
        .financing_schemes
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(scheme))
}

/// Publish a financing scheme.
#[utoipa::path(
    post,
    path = "/api/financing-schemes",
    request_body = NewFinancingSchemeSchema,
    responses(
        (status = 201, description = "Scheme created", body = FinancingSchemeSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["financing-schemes"],
    operation_id = "createFinancingScheme"
)]
#[post("/financing-schemes")]
pub async fn create_financing_scheme(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let raw = parse_json_body(&body)?;
    let payload = validate_new_financing_scheme(&raw).map_err(validation_failed)?;
    let scheme = state.financing_schemes.create(payload).await?;
    info!(id = %scheme.id, name = %scheme.name, "financing scheme created");
    Ok(HttpResponse::Created().json(scheme))
}

/// Withdraw a financing scheme.
#[utoipa::path(
    delete,
    path = "/api/financing-schemes/{id}",
    params(("id" = String, Path, description = "Scheme identifier")),
    responses(
        (status = 204, description = "Scheme deleted"),
        (status = 404, description = "Financing scheme not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["financing-schemes"],
    operation_id = "deleteFinancingScheme"
)]
#[delete("/financing-schemes/{id}")]
pub async fn delete_financing_scheme(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = record_id_or_not_found(&path, NOT_FOUND)?;
    if state.financing_schemes.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(NOT_FOUND))
    }
}
