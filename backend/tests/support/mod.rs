//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so each suite pulls this in
//! with `mod support;` and uses the subset it needs.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::Trace;
use backend::inbound::http::configure_api;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::MemoryStore;
use serde_json::{Value, json};

/// The API as the server mounts it, minus health probes and Swagger.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
}

/// Handler state over a fresh, empty in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::new(MemoryStore::new().into_ports())
}

/// Response status, `trace-id` header and JSON body (`Value::Null` when empty).
pub struct JsonResponse {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Send `req` and decode the response.
pub async fn send<S, B>(app: &S, req: Request) -> JsonResponse
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            panic!("response body is not JSON ({err}): {bytes:?}");
        })
    };
    JsonResponse {
        status,
        trace_id,
        body,
    }
}

pub fn get(uri: &str) -> Request {
    test::TestRequest::get().uri(uri).to_request()
}

pub fn post_json(uri: &str, body: &Value) -> Request {
    test::TestRequest::post().uri(uri).set_json(body).to_request()
}

pub fn delete(uri: &str) -> Request {
    test::TestRequest::delete().uri(uri).to_request()
}

/// Minimal valid project payload.
pub fn project_payload(name: &str, state: &str, technology: &str, status: &str) -> Value {
    json!({
        "name": name,
        "state": state,
        "technology": technology,
        "capacity": "750",
        "status": status,
    })
}

/// Valid capacity payload whose total is the sum of its components.
pub fn capacity_payload(state: &str) -> Value {
    json!({
        "state": state,
        "solarCapacity": "50",
        "windCapacity": "0",
        "hydroCapacity": "0",
        "totalCapacity": "50",
        "targetCapacity": "150",
        "population": 1_586_250,
    })
}

/// Valid emission report payload.
pub fn emission_payload(organization: &str) -> Value {
    json!({
        "organizationName": organization,
        "organizationType": "Local Government",
        "state": "Maharashtra",
        "reportingPeriod": "2024-Q1",
        "energyEmissions": "1200.50",
        "transportEmissions": "300",
        "wasteEmissions": "45.25",
        "totalEmissions": "1545.75",
    })
}

/// Valid financing scheme payload.
pub fn scheme_payload(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Support for rooftop solar installations",
        "category": category,
        "fundingAmount": "Up to 40% subsidy",
        "eligibility": "Residential households",
    })
}
