//! Boot-time storage selection and demo seeding.

use backend::config::ServerSettings;
use backend::domain::ports::StoragePorts;
use backend::domain::{DemoDataError, DemoDataSeeder};
use backend::outbound::memory::MemoryStore;
use backend::outbound::persistence::{
    DbPool, MigrationError, PoolConfig, PoolError, diesel_storage_ports, run_pending_migrations,
};
use seed_data::{DatasetError, DemoDataset};
use tracing::info;

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error("migration task failed: {0}")]
    MigrationTask(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("demo data set is invalid: {0}")]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Seed(#[from] DemoDataError),
}

/// Select the storage backend and optionally load the demo data set.
///
/// PostgreSQL is used when a database URL is configured; otherwise records
/// live in memory for the lifetime of the process.
pub async fn build_storage_ports(settings: &ServerSettings) -> Result<StoragePorts, StartupError> {
    let ports = match settings.database_url() {
        Some(url) => {
            if settings.run_migrations() {
                let migration_url = url.clone();
                tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
                    .await??;
            }
            let pool = DbPool::new(PoolConfig::new(url)).await?;
            info!(backend = "postgres", "storage selected");
            diesel_storage_ports(pool)
        }
        None => {
            info!(backend = "memory", "storage selected");
            MemoryStore::new().into_ports()
        }
    };

    if settings.seed_demo_data() {
        let dataset = DemoDataset::embedded()?;
        DemoDataSeeder::new(ports.clone()).seed(&dataset).await?;
    }

    Ok(ports)
}
