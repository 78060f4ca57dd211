//! OpenAPI documentation for the dashboard API.
//!
//! [`ApiDoc`] backs Swagger UI in debug builds and the `openapi-dump`
//! binary. Schemas come from the wrappers in
//! [`crate::inbound::http::schemas`] so domain types stay free of utoipa.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CapacitySummarySchema, CarbonEmissionSchema, DashboardSummarySchema, EmissionSummarySchema,
    ErrorCodeSchema, ErrorSchema, FinancingSchemeSchema, NewCarbonEmissionSchema,
    NewFinancingSchemeSchema, NewProjectSchema, NewRegionalCapacitySchema,
    OrganizationTypeSchema, ProjectSchema, ProjectStatusSchema, ProjectSummarySchema,
    RegionalCapacitySchema, SchemeCategorySchema, TechnologySchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Renewables dashboard API",
        description = "Projects, emission reports, financing schemes and regional capacity for the renewable energy dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::get_project,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::carbon_emissions::list_carbon_emissions,
        crate::inbound::http::carbon_emissions::get_carbon_emission,
        crate::inbound::http::carbon_emissions::create_carbon_emission,
        crate::inbound::http::carbon_emissions::delete_carbon_emission,
        crate::inbound::http::financing_schemes::list_financing_schemes,
        crate::inbound::http::financing_schemes::get_financing_scheme,
        crate::inbound::http::financing_schemes::create_financing_scheme,
        crate::inbound::http::financing_schemes::delete_financing_scheme,
        crate::inbound::http::regional_capacity::list_regional_capacity,
        crate::inbound::http::regional_capacity::get_regional_capacity,
        crate::inbound::http::regional_capacity::create_regional_capacity,
        crate::inbound::http::regional_capacity::delete_regional_capacity,
        crate::inbound::http::dashboard::dashboard_summary,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TechnologySchema,
        ProjectStatusSchema,
        OrganizationTypeSchema,
        SchemeCategorySchema,
        NewProjectSchema,
        ProjectSchema,
        NewCarbonEmissionSchema,
        CarbonEmissionSchema,
        NewFinancingSchemeSchema,
        FinancingSchemeSchema,
        NewRegionalCapacitySchema,
        RegionalCapacitySchema,
        CapacitySummarySchema,
        ProjectSummarySchema,
        EmissionSummarySchema,
        DashboardSummarySchema,
    )),
    tags(
        (name = "projects", description = "Renewable energy projects"),
        (name = "carbon-emissions", description = "Organisation emission reports"),
        (name = "financing-schemes", description = "Government financing schemes"),
        (name = "regional-capacity", description = "Installed and target capacity per state"),
        (name = "dashboard", description = "Aggregated dashboard figures"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/projects")]
    #[case("/api/projects/{id}")]
    #[case("/api/carbon-emissions")]
    #[case("/api/carbon-emissions/{id}")]
    #[case("/api/financing-schemes")]
    #[case("/api/financing-schemes/{id}")]
    #[case("/api/regional-capacity")]
    #[case("/api/regional-capacity/{state}")]
    #[case("/api/regional-capacity/{id}")]
    #[case("/api/dashboard/summary")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("crate.domain.Project", "createdAt")]
    #[case("crate.domain.RegionalCapacity", "targetCapacity")]
    #[case("crate.domain.Error", "traceId")]
    #[case("crate.domain.DashboardSummary", "emissions")]
    fn component_schemas_carry_wire_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }
}
