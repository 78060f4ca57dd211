//! Domain ports defining the storage edge of the hexagon.
//!
//! One repository trait per entity. Adapters (the in-memory store and the
//! Diesel repositories) implement them and report failures through the
//! shared [`StorageError`] enum, so inbound adapters never see an adapter's
//! native error types.

use std::sync::Arc;

mod macros;
pub(crate) use macros::define_port_error;

mod carbon_emission_repository;
mod financing_scheme_repository;
mod project_repository;
mod regional_capacity_repository;
mod storage_error;

#[cfg(test)]
pub use carbon_emission_repository::MockCarbonEmissionRepository;
pub use carbon_emission_repository::CarbonEmissionRepository;
#[cfg(test)]
pub use financing_scheme_repository::MockFinancingSchemeRepository;
pub use financing_scheme_repository::FinancingSchemeRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
pub use project_repository::ProjectRepository;
#[cfg(test)]
pub use regional_capacity_repository::MockRegionalCapacityRepository;
pub use regional_capacity_repository::RegionalCapacityRepository;
pub use storage_error::StorageError;

/// Bundle of every storage port, as selected at boot.
///
/// Both backends hand out the same shape: the in-memory store shares one
/// `Arc` across all four fields, the Diesel adapters get one each.
#[derive(Clone)]
pub struct StoragePorts {
    pub projects: Arc<dyn ProjectRepository>,
    pub carbon_emissions: Arc<dyn CarbonEmissionRepository>,
    pub financing_schemes: Arc<dyn FinancingSchemeRepository>,
    pub regional_capacity: Arc<dyn RegionalCapacityRepository>,
}
