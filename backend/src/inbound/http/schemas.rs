//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here mirror their
//! wire shape and register under the domain names. Decimal values are
//! documented as strings because that is how they travel.

#![expect(
    dead_code,
    reason = "Wrapper fields exist only for OpenAPI schema generation via utoipa"
)]

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed JSON or a payload that fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record matches the id or state in the path.
    #[schema(rename = "not_found")]
    NotFound,
    /// A storage failure; details are logged, not returned.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "Validation failed")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For validation failures: `{"fields": [{"field", "kind", ...}]}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Technology`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Technology)]
pub enum TechnologySchema {
    Solar,
    Wind,
    Hydro,
    Biomass,
    Nuclear,
}

/// OpenAPI schema for [`crate::domain::ProjectStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ProjectStatus)]
pub enum ProjectStatusSchema {
    Planning,
    Approved,
    #[schema(rename = "Under Construction")]
    UnderConstruction,
    Operational,
}

/// OpenAPI schema for [`crate::domain::OrganizationType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OrganizationType)]
pub enum OrganizationTypeSchema {
    #[schema(rename = "Small Business")]
    SmallBusiness,
    #[schema(rename = "Local Government")]
    LocalGovernment,
    #[schema(rename = "Large Corporation")]
    LargeCorporation,
    #[schema(rename = "NGO")]
    Ngo,
}

/// OpenAPI schema for [`crate::domain::SchemeCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SchemeCategory)]
pub enum SchemeCategorySchema {
    Subsidies,
    Loans,
    Grants,
    #[schema(rename = "Tax Incentives")]
    TaxIncentives,
}

/// OpenAPI schema for [`crate::domain::NewProject`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewProject, rename_all = "camelCase")]
pub struct NewProjectSchema {
    #[schema(example = "Bhadla Solar Park")]
    name: String,
    #[schema(example = "Rajasthan")]
    state: String,
    technology: TechnologySchema,
    /// Megawatts.
    #[schema(value_type = String, example = "2245")]
    capacity: String,
    status: ProjectStatusSchema,
    description: Option<String>,
    #[schema(value_type = Option<String>, example = "98500000000")]
    investment_amount: Option<String>,
    #[schema(example = "2020-03-01")]
    completion_date: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Project`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Project, rename_all = "camelCase")]
pub struct ProjectSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    name: String,
    state: String,
    technology: TechnologySchema,
    #[schema(value_type = String)]
    capacity: String,
    status: ProjectStatusSchema,
    description: Option<String>,
    #[schema(value_type = Option<String>)]
    investment_amount: Option<String>,
    completion_date: Option<String>,
    #[schema(example = "2025-01-15T12:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::NewCarbonEmission`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewCarbonEmission, rename_all = "camelCase")]
pub struct NewCarbonEmissionSchema {
    #[schema(example = "Pune Municipal Corporation")]
    organization_name: String,
    organization_type: OrganizationTypeSchema,
    #[schema(example = "Maharashtra")]
    state: String,
    #[schema(example = "2024-Q1")]
    reporting_period: String,
    /// Tonnes of CO2 equivalent.
    #[schema(example = "1200.50")]
    energy_emissions: String,
    #[schema(example = "300")]
    transport_emissions: String,
    #[schema(example = "45.25")]
    waste_emissions: String,
    #[schema(example = "1545.75")]
    total_emissions: String,
}

/// OpenAPI schema for [`crate::domain::CarbonEmission`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CarbonEmission, rename_all = "camelCase")]
pub struct CarbonEmissionSchema {
    id: String,
    organization_name: String,
    organization_type: OrganizationTypeSchema,
    state: String,
    reporting_period: String,
    energy_emissions: String,
    transport_emissions: String,
    waste_emissions: String,
    total_emissions: String,
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::NewFinancingScheme`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewFinancingScheme, rename_all = "camelCase")]
pub struct NewFinancingSchemeSchema {
    #[schema(example = "PM-KUSUM")]
    name: String,
    description: String,
    category: SchemeCategorySchema,
    /// Free text, for example `Up to 60% subsidy`.
    funding_amount: String,
    eligibility: String,
    application_deadline: Option<String>,
    #[schema(example = "Solar")]
    target_technology: Option<String>,
    contact_info: Option<String>,
}

/// OpenAPI schema for [`crate::domain::FinancingScheme`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FinancingScheme, rename_all = "camelCase")]
pub struct FinancingSchemeSchema {
    id: String,
    name: String,
    description: String,
    category: SchemeCategorySchema,
    funding_amount: String,
    eligibility: String,
    application_deadline: Option<String>,
    target_technology: Option<String>,
    contact_info: Option<String>,
}

/// OpenAPI schema for [`crate::domain::NewRegionalCapacity`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewRegionalCapacity, rename_all = "camelCase")]
pub struct NewRegionalCapacitySchema {
    #[schema(example = "Goa")]
    state: String,
    #[schema(example = "50")]
    solar_capacity: String,
    #[schema(example = "0")]
    wind_capacity: String,
    #[schema(example = "0")]
    hydro_capacity: String,
    #[schema(example = "50")]
    total_capacity: String,
    #[schema(example = "150")]
    target_capacity: String,
    #[schema(example = 1586250)]
    population: Option<i32>,
}

/// OpenAPI schema for [`crate::domain::RegionalCapacity`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RegionalCapacity, rename_all = "camelCase")]
pub struct RegionalCapacitySchema {
    id: String,
    state: String,
    solar_capacity: String,
    wind_capacity: String,
    hydro_capacity: String,
    total_capacity: String,
    target_capacity: String,
    population: Option<i32>,
}

/// OpenAPI schema for [`crate::domain::CapacitySummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CapacitySummary, rename_all = "camelCase")]
pub struct CapacitySummarySchema {
    region_count: u64,
    solar: String,
    wind: String,
    hydro: String,
    total: String,
    target: String,
    #[schema(example = "80.7")]
    target_progress_percent: String,
}

/// OpenAPI schema for [`crate::domain::ProjectSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ProjectSummary, rename_all = "camelCase")]
pub struct ProjectSummarySchema {
    total: u64,
    operational: u64,
    /// Count per status label; every label is present.
    by_status: BTreeMap<String, u64>,
    /// Count per technology label; every label is present.
    by_technology: BTreeMap<String, u64>,
}

/// OpenAPI schema for [`crate::domain::EmissionSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EmissionSummary, rename_all = "camelCase")]
pub struct EmissionSummarySchema {
    report_count: u64,
    total: String,
    #[schema(example = "0.00")]
    average: String,
    energy: String,
    transport: String,
    waste: String,
}

/// OpenAPI schema for [`crate::domain::DashboardSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DashboardSummary)]
pub struct DashboardSummarySchema {
    capacity: CapacitySummarySchema,
    projects: ProjectSummarySchema,
    emissions: EmissionSummarySchema,
}
