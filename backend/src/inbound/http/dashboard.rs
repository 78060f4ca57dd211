//! Dashboard summary endpoint.
//!
//! ```text
//! GET /api/dashboard/summary
//! ```

use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::domain::{DashboardSummary, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DashboardSummarySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Aggregate capacity, project and emission figures across all records.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardSummarySchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "getDashboardSummary"
)]
#[get("/dashboard/summary")]
pub async fn dashboard_summary(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let (projects, emissions, regions) = tokio::try_join!(
        state.projects.list(),
        state.carbon_emissions.list(),
        state.regional_capacity.list(),
    )?;
    let summary = DashboardSummary::compute(&projects, &emissions, &regions).map_err(|err| {
        error!(error = %err, "dashboard totals out of range");
        Error::internal(err.to_string())
    })?;
    Ok(HttpResponse::Ok().json(summary))
}
