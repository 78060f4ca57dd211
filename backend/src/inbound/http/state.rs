//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the storage
//! ports, so they run unchanged over either backend.

use std::sync::Arc;

use crate::domain::ports::{
    CarbonEmissionRepository, FinancingSchemeRepository, ProjectRepository,
    RegionalCapacityRepository, StoragePorts,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub projects: Arc<dyn ProjectRepository>,
    pub carbon_emissions: Arc<dyn CarbonEmissionRepository>,
    pub financing_schemes: Arc<dyn FinancingSchemeRepository>,
    pub regional_capacity: Arc<dyn RegionalCapacityRepository>,
}

impl HttpState {
    /// Build handler state from the storage ports selected at boot.
    pub fn new(ports: StoragePorts) -> Self {
        let StoragePorts {
            projects,
            carbon_emissions,
            financing_schemes,
            regional_capacity,
        } = ports;
        Self {
            projects,
            carbon_emissions,
            financing_schemes,
            regional_capacity,
        }
    }
}

impl From<StoragePorts> for HttpState {
    fn from(ports: StoragePorts) -> Self {
        Self::new(ports)
    }
}
