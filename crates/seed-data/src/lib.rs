//! Fixed demonstration data for the renewables dashboard backend.
//!
//! The data set ships embedded in the crate as JSON and is shared by every
//! storage backend, so the in-memory store and the database seeder always
//! start from the same records. Seed types hold plain text and do not depend
//! on the backend domain types; callers convert and validate them at the
//! point of use.
//!
//! # Example
//!
//! ```
//! use seed_data::DemoDataset;
//!
//! let dataset = DemoDataset::embedded().expect("embedded data set is valid");
//! assert_eq!(dataset.regions().len(), 10);
//! assert_eq!(dataset.projects().len(), 5);
//! assert_eq!(dataset.schemes().len(), 4);
//! ```

mod dataset;
mod error;

pub use dataset::{DemoDataset, ProjectSeed, RegionSeed, SchemeSeed};
pub use error::DatasetError;
