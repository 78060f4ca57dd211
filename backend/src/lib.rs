//! Backend library for the renewable energy dashboard.
//!
//! The crate follows a hexagonal layout: [`domain`] holds records, rules and
//! storage ports; [`outbound`] implements those ports in memory and over
//! PostgreSQL; [`inbound`] exposes them over HTTP.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
