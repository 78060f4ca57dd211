//! PostgreSQL persistence adapters using Diesel.
//!
//! Each repository is a thin translation layer between Diesel rows and
//! domain records; no dashboard logic lives here. Connections come from a
//! `bb8` pool of `diesel-async` connections and every failure is reported as
//! a domain `StorageError`.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, PoolConfig, diesel_storage_ports};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/renewables")).await?;
//! let ports = diesel_storage_ports(pool);
//! ```

mod diesel_carbon_emission_repository;
mod diesel_financing_scheme_repository;
mod diesel_project_repository;
mod diesel_regional_capacity_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

use std::sync::Arc;

pub use diesel_carbon_emission_repository::DieselCarbonEmissionRepository;
pub use diesel_financing_scheme_repository::DieselFinancingSchemeRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_regional_capacity_repository::DieselRegionalCapacityRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

use crate::domain::ports::StoragePorts;

/// Wire every Diesel repository onto one shared pool.
pub fn diesel_storage_ports(pool: DbPool) -> StoragePorts {
    StoragePorts {
        projects: Arc::new(DieselProjectRepository::new(pool.clone())),
        carbon_emissions: Arc::new(DieselCarbonEmissionRepository::new(pool.clone())),
        financing_schemes: Arc::new(DieselFinancingSchemeRepository::new(pool.clone())),
        regional_capacity: Arc::new(DieselRegionalCapacityRepository::new(pool)),
    }
}
