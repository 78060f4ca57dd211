//! Tests for payload validation.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

#[fixture]
fn project_payload() -> Value {
    json!({
        "name": "Pavagada Solar Park",
        "state": "Karnataka",
        "technology": "Solar",
        "capacity": "2050",
        "status": "Operational",
        "description": "Large solar park",
        "investmentAmount": "14800000000",
        "completionDate": "2019-12-31"
    })
}

#[fixture]
fn emission_payload() -> Value {
    json!({
        "organizationName": "Coastal Textiles",
        "organizationType": "Small Business",
        "state": "Gujarat",
        "reportingPeriod": "2024-Q1",
        "energyEmissions": "120.5",
        "transportEmissions": "30",
        "wasteEmissions": "4.25",
        "totalEmissions": "154.75"
    })
}

#[fixture]
fn capacity_payload() -> Value {
    json!({
        "state": "Goa",
        "solarCapacity": "100",
        "windCapacity": "0",
        "hydroCapacity": "0",
        "totalCapacity": "100",
        "targetCapacity": "500",
        "population": 1500000
    })
}

fn kinds(errors: &ValidationErrors) -> Vec<(&'static str, &'static str)> {
    errors
        .violations()
        .iter()
        .map(|v| (v.field, v.kind.as_str()))
        .collect()
}

#[rstest]
fn accepts_complete_project(project_payload: Value) {
    let project = validate_new_project(&project_payload).expect("valid project");
    assert_eq!(project.technology, Technology::Solar);
    assert_eq!(project.status, ProjectStatus::Operational);
    assert_eq!(project.capacity.to_string(), "2050");
    assert_eq!(
        project.investment_amount.map(|v| v.to_string()).as_deref(),
        Some("14800000000")
    );
}

#[rstest]
fn optional_fields_accept_null_and_absence(mut project_payload: Value) {
    let object = project_payload.as_object_mut().expect("object");
    object.insert("description".into(), Value::Null);
    object.remove("investmentAmount");
    object.remove("completionDate");

    let project = validate_new_project(&project_payload).expect("valid project");
    assert!(project.description.is_none());
    assert!(project.investment_amount.is_none());
    assert!(project.completion_date.is_none());
}

#[rstest]
fn unknown_keys_are_ignored(mut project_payload: Value) {
    let object = project_payload.as_object_mut().expect("object");
    object.insert("id".into(), json!("client-chosen"));
    object.insert("createdAt".into(), json!("2020-01-01"));
    object.insert("colour".into(), json!("green"));

    assert!(validate_new_project(&project_payload).is_ok());
}

#[rstest]
fn collects_every_violation_in_schema_order() {
    let payload = json!({
        "name": "",
        "technology": "Geothermal",
        "capacity": 2050,
        "status": null,
        "investmentAmount": "lots"
    });

    let errors = validate_new_project(&payload).expect_err("invalid project");
    assert_eq!(
        kinds(&errors),
        vec![
            ("name", "blank"),
            ("state", "missing"),
            ("technology", "not_in_enumeration"),
            ("capacity", "wrong_type"),
            ("status", "missing"),
            ("investmentAmount", "invalid_decimal"),
        ]
    );
}

#[rstest]
#[case(json!([]))]
#[case(json!("project"))]
#[case(Value::Null)]
fn non_object_payloads_report_root(#[case] payload: Value) {
    let errors = validate_new_financing_scheme(&payload).expect_err("not an object");
    assert_eq!(
        errors.violations(),
        &[FieldViolation {
            field: ROOT_FIELD,
            kind: ViolationKind::WrongType {
                expected: JsonKind::Object
            },
        }]
    );
}

#[rstest]
fn violations_serialize_with_context() {
    let payload = json!({ "category": "Donations", "name": 7 });
    let errors = validate_new_financing_scheme(&payload).expect_err("invalid scheme");
    let value = serde_json::to_value(&errors).expect("serialize");

    assert_eq!(
        value["fields"][0],
        json!({ "field": "name", "kind": "wrong_type", "expected": "string" })
    );
    assert_eq!(
        value["fields"][2],
        json!({
            "field": "category",
            "kind": "not_in_enumeration",
            "allowed": ["Subsidies", "Loans", "Grants", "Tax Incentives"]
        })
    );
    assert_eq!(value["fields"].as_array().map(Vec::len), Some(5));
}

#[rstest]
fn accepts_emission_report(emission_payload: Value) {
    let emission = validate_new_carbon_emission(&emission_payload).expect("valid report");
    assert_eq!(emission.organization_type, OrganizationType::SmallBusiness);
    assert_eq!(emission.total_emissions.to_string(), "154.75");
}

#[rstest]
fn organization_type_is_case_sensitive(mut emission_payload: Value) {
    emission_payload["organizationType"] = json!("ngo");
    let errors = validate_new_carbon_emission(&emission_payload).expect_err("bad label");
    assert_eq!(kinds(&errors), vec![("organizationType", "not_in_enumeration")]);
}

#[rstest]
fn total_emissions_are_not_recomputed(mut emission_payload: Value) {
    emission_payload["totalEmissions"] = json!("1");
    let emission = validate_new_carbon_emission(&emission_payload).expect("valid report");
    assert_eq!(emission.total_emissions.to_string(), "1");
}

#[rstest]
fn accepts_capacity_with_population(capacity_payload: Value) {
    let capacity = validate_new_regional_capacity(&capacity_payload).expect("valid capacity");
    assert_eq!(capacity.state, "Goa");
    assert_eq!(capacity.population, Some(1_500_000));
}

#[rstest]
#[case(json!(1.5))]
#[case(json!("1500000"))]
#[case(json!(3_000_000_000_i64))]
fn population_must_be_a_32_bit_integer(mut capacity_payload: Value, #[case] population: Value) {
    capacity_payload["population"] = population;
    let errors = validate_new_regional_capacity(&capacity_payload).expect_err("bad population");
    assert_eq!(
        errors.violations(),
        &[FieldViolation {
            field: "population",
            kind: ViolationKind::WrongType {
                expected: JsonKind::Integer
            },
        }]
    );
}

#[rstest]
fn validation_is_deterministic(capacity_payload: Value) {
    let first = validate_new_regional_capacity(&capacity_payload);
    let second = validate_new_regional_capacity(&capacity_payload);
    assert_eq!(first, second);
}

#[rstest]
#[case("solarCapacity", "79228162514264337593543950335")]
#[case("totalCapacity", "100000000")]
#[case("targetCapacity", "12.345")]
fn capacities_must_fit_their_column(
    mut capacity_payload: Value,
    #[case] field: &'static str,
    #[case] value: &str,
) {
    capacity_payload[field] = json!(value);
    let errors = validate_new_regional_capacity(&capacity_payload).expect_err("out of range");
    assert_eq!(kinds(&errors), vec![(field, "invalid_decimal")]);
}

#[rstest]
#[case("9999999999999.99", true)]
#[case("10000000000000", false)]
fn investment_amount_has_a_wider_column(
    mut project_payload: Value,
    #[case] amount: &str,
    #[case] accepted: bool,
) {
    project_payload["investmentAmount"] = json!(amount);
    let verdict = validate_new_project(&project_payload);
    assert_eq!(verdict.is_ok(), accepted, "{verdict:?}");
}

#[rstest]
fn technology_outside_the_catalogue_is_rejected(mut project_payload: Value) {
    project_payload["technology"] = json!("Geothermal");
    let errors = validate_new_project(&project_payload).expect_err("unknown technology");
    assert_eq!(
        errors.violations(),
        &[FieldViolation {
            field: "technology",
            kind: ViolationKind::NotInEnumeration {
                allowed: Technology::LABELS,
            },
        }]
    );
}
