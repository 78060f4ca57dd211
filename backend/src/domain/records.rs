//! Record types for the four dashboard entities.
//!
//! Each entity has a stored form carrying the store-assigned fields and a
//! `New*` payload form produced by the validators in
//! [`crate::domain::validation`]. Both serialize with camelCase keys; absent
//! optional values serialize as `null`.

mod carbon_emission;
mod financing_scheme;
mod project;
mod regional_capacity;

pub use carbon_emission::{CarbonEmission, NewCarbonEmission};
pub use financing_scheme::{FinancingScheme, NewFinancingScheme};
pub use project::{NewProject, Project};
pub use regional_capacity::{NewRegionalCapacity, RegionalCapacity};
