//! HTTP behaviour of the regional capacity endpoints over the in-memory store.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::json;

mod support;

use support::{capacity_payload, delete, get, memory_state, post_json, send, test_app};

#[rstest]
#[actix_web::test]
async fn goa_lifecycle() {
    let app = test::init_service(test_app(memory_state())).await;

    let created = send(&app, post_json("/api/regional-capacity", &capacity_payload("Goa"))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["state"], "Goa");
    assert_eq!(created.body["totalCapacity"], "50");
    assert_eq!(created.body["population"], 1_586_250);
    let id = created.body["id"].as_str().expect("id").to_owned();

    let found = send(&app, get("/api/regional-capacity/Goa")).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, created.body);

    let deleted = send(&app, delete(&format!("/api/regional-capacity/{id}"))).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = send(&app, get("/api/regional-capacity/Goa")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Regional capacity data not found");
}

#[rstest]
#[actix_web::test]
async fn state_lookup_is_case_sensitive_and_decodes_spaces() {
    let app = test::init_service(test_app(memory_state())).await;
    send(
        &app,
        post_json("/api/regional-capacity", &capacity_payload("Tamil Nadu")),
    )
    .await;

    let found = send(&app, get("/api/regional-capacity/Tamil%20Nadu")).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["state"], "Tamil Nadu");

    let lowercase = send(&app, get("/api/regional-capacity/tamil%20nadu")).await;
    assert_eq!(lowercase.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn memory_store_accepts_duplicate_states() {
    let app = test::init_service(test_app(memory_state())).await;
    let first = send(&app, post_json("/api/regional-capacity", &capacity_payload("Goa"))).await;
    let mut second_payload = capacity_payload("Goa");
    second_payload["targetCapacity"] = json!("300");
    let second = send(&app, post_json("/api/regional-capacity", &second_payload)).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);

    let listed = send(&app, get("/api/regional-capacity")).await;
    assert_eq!(listed.body.as_array().expect("array").len(), 2);

    let found = send(&app, get("/api/regional-capacity/Goa")).await;
    assert_eq!(found.body["id"], first.body["id"]);
}

#[rstest]
#[case("/api/regional-capacity/00000000-0000-0000-0000-000000000000")]
#[case("/api/regional-capacity/Goa")]
#[actix_web::test]
async fn deleting_unknown_ids_is_not_found(#[case] uri: &str) {
    let app = test::init_service(test_app(memory_state())).await;
    let res = send(&app, delete(uri)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "Regional capacity not found");
}

#[rstest]
#[case::fractional_population(json!(12.5))]
#[case::text_population(json!("1000"))]
#[case::overflowing_population(json!(3_000_000_000_i64))]
#[actix_web::test]
async fn population_must_be_an_integer(#[case] population: serde_json::Value) {
    let app = test::init_service(test_app(memory_state())).await;
    let mut payload = capacity_payload("Sikkim");
    payload["population"] = population;

    let res = send(&app, post_json("/api/regional-capacity", &payload)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["details"]["fields"][0]["field"], "population");
    assert_eq!(res.body["details"]["fields"][0]["kind"], "wrong_type");
    assert_eq!(res.body["details"]["fields"][0]["expected"], "integer");
}

#[rstest]
#[actix_web::test]
async fn capacities_beyond_the_column_range_are_rejected() {
    let app = test::init_service(test_app(memory_state())).await;
    let mut payload = capacity_payload("Ladakh");
    payload["solarCapacity"] = json!("79228162514264337593543950335");
    payload["totalCapacity"] = json!("79228162514264337593543950335");

    let res = send(&app, post_json("/api/regional-capacity", &payload)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let fields = res.body["details"]["fields"].as_array().expect("fields");
    let rejected: Vec<_> = fields
        .iter()
        .map(|f| (f["field"].as_str(), f["kind"].as_str()))
        .collect();
    assert_eq!(
        rejected,
        [
            (Some("solarCapacity"), Some("invalid_decimal")),
            (Some("totalCapacity"), Some("invalid_decimal")),
        ]
    );

    let summary = send(&app, get("/api/dashboard/summary")).await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.body["capacity"]["regionCount"], 0);
}
