//! HTTP behaviour of the emission report and financing scheme endpoints.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{
    delete, emission_payload, get, memory_state, post_json, scheme_payload, send, test_app,
};

#[rstest]
#[actix_web::test]
async fn emission_reports_keep_exact_decimals() {
    let app = test::init_service(test_app(memory_state())).await;
    let payload = emission_payload("Pune Municipal Corporation");

    let created = send(&app, post_json("/api/carbon-emissions", &payload)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["energyEmissions"], "1200.50");
    assert_eq!(created.body["wasteEmissions"], "45.25");
    assert_eq!(created.body["organizationType"], "Local Government");

    let id = created.body["id"].as_str().expect("id");
    let fetched = send(&app, get(&format!("/api/carbon-emissions/{id}"))).await;
    assert_eq!(fetched.body, created.body);
}

#[rstest]
#[actix_web::test]
async fn emission_reports_can_be_deleted_once() {
    let app = test::init_service(test_app(memory_state())).await;
    let created = send(
        &app,
        post_json("/api/carbon-emissions", &emission_payload("Infosys")),
    )
    .await;
    let uri = format!("/api/carbon-emissions/{}", created.body["id"].as_str().expect("id"));

    assert_eq!(send(&app, delete(&uri)).await.status, StatusCode::NO_CONTENT);
    let again = send(&app, delete(&uri)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["message"], "Emission record not found");
}

#[rstest]
#[actix_web::test]
async fn emission_reports_reject_unknown_organisation_types() {
    let app = test::init_service(test_app(memory_state())).await;
    let mut payload = emission_payload("Acme");
    payload["organizationType"] = json!("Cooperative");

    let res = send(&app, post_json("/api/carbon-emissions", &payload)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let violation = &res.body["details"]["fields"][0];
    assert_eq!(violation["field"], "organizationType");
    assert_eq!(
        violation["allowed"],
        json!(["Small Business", "Local Government", "Large Corporation", "NGO"])
    );
}

#[rstest]
#[actix_web::test]
async fn schemes_filter_by_category() {
    let app = test::init_service(test_app(memory_state())).await;
    for (name, category) in [
        ("Rooftop Subsidy", "Subsidies"),
        ("Green Loan", "Loans"),
        ("Wind Depreciation", "Tax Incentives"),
    ] {
        let res = send(&app, post_json("/api/financing-schemes", &scheme_payload(name, category))).await;
        assert_eq!(res.status, StatusCode::CREATED);
    }

    let tax = send(&app, get("/api/financing-schemes?category=Tax%20Incentives")).await;
    let names: Vec<&Value> = tax
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|scheme| &scheme["name"])
        .collect();
    assert_eq!(names, [&json!("Wind Depreciation")]);

    let unknown = send(&app, get("/api/financing-schemes?category=Vouchers")).await;
    assert_eq!(unknown.body, json!([]));

    let all = send(&app, get("/api/financing-schemes?category=")).await;
    assert_eq!(all.body.as_array().expect("array").len(), 3);

    let repeated = send(&app, get("/api/financing-schemes?category=Loans&category=Grants")).await;
    assert_eq!(repeated.status, StatusCode::OK);
    assert_eq!(repeated.body.as_array().expect("array").len(), 3);
}

#[rstest]
#[actix_web::test]
async fn schemes_round_trip_optional_fields() {
    let app = test::init_service(test_app(memory_state())).await;
    let mut payload = scheme_payload("PM Surya Ghar", "Subsidies");
    payload["applicationDeadline"] = json!("March 31, 2027");
    payload["targetTechnology"] = json!("Solar");

    let created = send(&app, post_json("/api/financing-schemes", &payload)).await;
    let id = created.body["id"].as_str().expect("id");
    let fetched = send(&app, get(&format!("/api/financing-schemes/{id}"))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["applicationDeadline"], "March 31, 2027");
    assert_eq!(fetched.body["targetTechnology"], "Solar");
    assert_eq!(fetched.body["contactInfo"], Value::Null);
}

#[rstest]
#[actix_web::test]
async fn missing_schemes_are_not_found() {
    let app = test::init_service(test_app(memory_state())).await;
    let res = send(
        &app,
        get("/api/financing-schemes/00000000-0000-0000-0000-000000000000"),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "Financing scheme not found");
}
