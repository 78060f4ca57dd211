//! Idempotent loading of the demonstration data set.
//!
//! Seeds go through the same validators as API payloads, so a malformed seed
//! fails loudly instead of storing a record the API would have rejected.
//! Records already present are skipped: regions are matched by state,
//! projects and schemes by name.

use std::collections::HashSet;

use seed_data::DemoDataset;
use serde::Serialize;
use tracing::{debug, info};

use super::ports::{StorageError, StoragePorts};
use super::validation::{
    ValidationErrors, validate_new_financing_scheme, validate_new_project,
    validate_new_regional_capacity,
};

/// Inserted and skipped counts for one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub inserted: usize,
    pub skipped: usize,
}

/// Result of one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSeedOutcome {
    pub regions: SeedCounts,
    pub projects: SeedCounts,
    pub schemes: SeedCounts,
}

impl DemoSeedOutcome {
    /// Total records inserted across collections.
    pub fn inserted(&self) -> usize {
        self.regions.inserted + self.projects.inserted + self.schemes.inserted
    }

    /// Total records skipped across collections.
    pub fn skipped(&self) -> usize {
        self.regions.skipped + self.projects.skipped + self.schemes.skipped
    }
}

/// Errors raised while seeding.
#[derive(Debug, thiserror::Error)]
pub enum DemoDataError {
    /// A seed failed payload validation.
    #[error("demo {collection} seed '{key}' is invalid: {errors}")]
    InvalidSeed {
        collection: &'static str,
        key: String,
        errors: ValidationErrors,
    },
    /// A seed could not be converted to JSON for validation.
    #[error("demo {collection} seed '{key}' could not be encoded: {message}")]
    Encode {
        collection: &'static str,
        key: String,
        message: String,
    },
    /// The store rejected a read or write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn to_payload(
    collection: &'static str,
    key: &str,
    seed: &impl Serialize,
) -> Result<serde_json::Value, DemoDataError> {
    serde_json::to_value(seed).map_err(|err| DemoDataError::Encode {
        collection,
        key: key.to_owned(),
        message: err.to_string(),
    })
}

fn invalid(collection: &'static str, key: &str) -> impl FnOnce(ValidationErrors) -> DemoDataError {
    let key = key.to_owned();
    move |errors| DemoDataError::InvalidSeed {
        collection,
        key,
        errors,
    }
}

/// Domain service writing [`DemoDataset`] records through the storage ports.
///
/// # Examples
/// ```no_run
/// use backend::domain::DemoDataSeeder;
/// use backend::outbound::memory::MemoryStore;
/// use seed_data::DemoDataset;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let seeder = DemoDataSeeder::new(MemoryStore::new().into_ports());
/// let outcome = seeder.seed(&DemoDataset::embedded()?).await?;
/// assert_eq!(outcome.regions.inserted, 10);
/// # Ok(())
/// # }
/// ```
pub struct DemoDataSeeder {
    ports: StoragePorts,
}

impl DemoDataSeeder {
    /// Create a seeder over the selected storage backend.
    pub fn new(ports: StoragePorts) -> Self {
        Self { ports }
    }

    /// Insert every seed not already present.
    ///
    /// # Errors
    /// Returns [`DemoDataError`] when a seed is invalid or storage fails.
    /// Records inserted before the failure stay in place; rerunning the
    /// seeder completes the set.
    pub async fn seed(&self, dataset: &DemoDataset) -> Result<DemoSeedOutcome, DemoDataError> {
        let outcome = DemoSeedOutcome {
            regions: self.seed_regions(dataset).await?,
            projects: self.seed_projects(dataset).await?,
            schemes: self.seed_schemes(dataset).await?,
        };
        info!(
            inserted = outcome.inserted(),
            skipped = outcome.skipped(),
            "demo data seeding finished"
        );
        Ok(outcome)
    }

    async fn seed_regions(&self, dataset: &DemoDataset) -> Result<SeedCounts, DemoDataError> {
        let mut counts = SeedCounts::default();
        for seed in dataset.regions() {
            let payload = to_payload("region", &seed.state, seed)?;
            let region = validate_new_regional_capacity(&payload)
                .map_err(invalid("region", &seed.state))?;
            if self
                .ports
                .regional_capacity
                .find_by_state(&region.state)
                .await?
                .is_some()
            {
                debug!(state = %region.state, "region already present");
                counts.skipped += 1;
                continue;
            }
            self.ports.regional_capacity.create(region).await?;
            counts.inserted += 1;
        }
        Ok(counts)
    }

    async fn seed_projects(&self, dataset: &DemoDataset) -> Result<SeedCounts, DemoDataError> {
        let mut existing: HashSet<String> = self
            .ports
            .projects
            .list()
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        let mut counts = SeedCounts::default();
        for seed in dataset.projects() {
            let payload = to_payload("project", &seed.name, seed)?;
            let project = validate_new_project(&payload).map_err(invalid("project", &seed.name))?;
            if !existing.insert(project.name.clone()) {
                debug!(name = %project.name, "project already present");
                counts.skipped += 1;
                continue;
            }
            self.ports.projects.create(project).await?;
            counts.inserted += 1;
        }
        Ok(counts)
    }

    async fn seed_schemes(&self, dataset: &DemoDataset) -> Result<SeedCounts, DemoDataError> {
        let mut existing: HashSet<String> = self
            .ports
            .financing_schemes
            .list()
            .await?
            .into_iter()
            .map(|s| s.name)
            .collect();
        let mut counts = SeedCounts::default();
        for seed in dataset.schemes() {
            let payload = to_payload("scheme", &seed.name, seed)?;
            let scheme =
                validate_new_financing_scheme(&payload).map_err(invalid("scheme", &seed.name))?;
            if !existing.insert(scheme.name.clone()) {
                debug!(name = %scheme.name, "scheme already present");
                counts.skipped += 1;
                continue;
            }
            self.ports.financing_schemes.create(scheme).await?;
            counts.inserted += 1;
        }
        Ok(counts)
    }
}
