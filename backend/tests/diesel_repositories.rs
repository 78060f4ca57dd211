//! Diesel repositories against a live PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` to a disposable database to run these tests; they
//! are skipped otherwise. Records use unique names so repeated runs against
//! the same database do not collide.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use backend::domain::ports::{StorageError, StoragePorts};
use backend::domain::validation::{
    validate_new_carbon_emission, validate_new_financing_scheme, validate_new_project,
    validate_new_regional_capacity,
};
use backend::domain::{ProjectStatus, RecordId, Technology};
use backend::outbound::persistence::{
    DbPool, PoolConfig, diesel_storage_ports, run_pending_migrations,
};
use serde_json::json;
use uuid::Uuid;

mod support;

use support::{capacity_payload, emission_payload, scheme_payload};

const DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

/// Migrate the test database and wire the Diesel ports, or `None` to skip.
async fn diesel_ports() -> Option<StoragePorts> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        eprintln!("{DATABASE_URL_ENV} not set; skipping PostgreSQL repository test");
        return None;
    };
    let migrate_url = url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migrate_url))
        .await
        .expect("migration task joins")
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds");
    Some(diesel_storage_ports(pool))
}

fn unique(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4())
}

#[tokio::test]
async fn projects_round_trip_with_numeric_scale() {
    let Some(ports) = diesel_ports().await else {
        return;
    };
    let name = unique("Pavagada Solar Park");
    let payload = validate_new_project(&json!({
        "name": name,
        "state": "Karnataka",
        "technology": "Solar",
        "capacity": "2050",
        "status": "Operational",
        "investmentAmount": "1400000000.5",
    }))
    .expect("valid payload");

    let created = ports.projects.create(payload).await.expect("insert");
    assert_eq!(created.name, name);
    assert_eq!(created.technology, Technology::Solar);
    assert_eq!(created.status, ProjectStatus::Operational);
    assert_eq!(created.capacity.to_string(), "2050.00");
    assert_eq!(
        created.investment_amount.map(|value| value.to_string()),
        Some("1400000000.50".to_owned())
    );
    assert_eq!(created.description, None);

    let found = ports
        .projects
        .find_by_id(&created.id)
        .await
        .expect("lookup")
        .expect("project exists");
    assert_eq!(found, created);

    let listed = ports.projects.list().await.expect("list");
    assert!(listed.iter().any(|project| project.id == created.id));
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let Some(ports) = diesel_ports().await else {
        return;
    };
    let payload =
        validate_new_financing_scheme(&scheme_payload(&unique("PM-KUSUM"), "Subsidies"))
            .expect("valid payload");
    let created = ports
        .financing_schemes
        .create(payload)
        .await
        .expect("insert");

    assert!(ports.financing_schemes.delete(&created.id).await.expect("first delete"));
    assert!(!ports.financing_schemes.delete(&created.id).await.expect("second delete"));
    assert_eq!(
        ports
            .financing_schemes
            .find_by_id(&created.id)
            .await
            .expect("lookup"),
        None
    );
}

#[tokio::test]
async fn unknown_ids_are_absent() {
    let Some(ports) = diesel_ports().await else {
        return;
    };
    let id = RecordId::random();
    assert_eq!(ports.carbon_emissions.find_by_id(&id).await.expect("lookup"), None);
    assert!(!ports.carbon_emissions.delete(&id).await.expect("delete"));
}

#[tokio::test]
async fn emissions_keep_their_exact_components() {
    let Some(ports) = diesel_ports().await else {
        return;
    };
    let payload = validate_new_carbon_emission(&emission_payload(&unique("Pune Municipal")))
        .expect("valid payload");
    let created = ports
        .carbon_emissions
        .create(payload)
        .await
        .expect("insert");

    assert_eq!(created.energy_emissions.to_string(), "1200.50");
    assert_eq!(created.transport_emissions.to_string(), "300.00");
    assert_eq!(created.waste_emissions.to_string(), "45.25");
    assert_eq!(created.total_emissions.to_string(), "1545.75");
}

#[tokio::test]
async fn regional_capacity_is_unique_per_state() {
    let Some(ports) = diesel_ports().await else {
        return;
    };
    let state = unique("Goa");
    let payload =
        validate_new_regional_capacity(&capacity_payload(&state)).expect("valid payload");

    let created = ports
        .regional_capacity
        .create(payload.clone())
        .await
        .expect("first insert");
    assert_eq!(created.population, Some(1_586_250));

    let found = ports
        .regional_capacity
        .find_by_state(&state)
        .await
        .expect("lookup")
        .expect("state exists");
    assert_eq!(found.id, created.id);

    let err = ports
        .regional_capacity
        .create(payload)
        .await
        .expect_err("duplicate state is rejected");
    assert!(matches!(err, StorageError::Conflict { .. }), "{err:?}");

    assert!(ports.regional_capacity.delete(&created.id).await.expect("delete"));
}
