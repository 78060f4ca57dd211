//! Load the demo data set into a PostgreSQL database.
//!
//! Pending migrations are applied first unless `--skip-migrations` is given.
//! Records that already exist (same region state, project name or scheme
//! name) are left alone, so the command can be re-run safely.

use std::env;

use backend::domain::DemoDataSeeder;
use backend::outbound::persistence::{
    DbPool, PoolConfig, diesel_storage_ports, run_pending_migrations,
};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use seed_data::DemoDataset;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DATABASE_URL_ENVS: [&str; 2] = ["RENEWABLES_DATABASE_URL", "DATABASE_URL"];

/// `seed-database` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-database",
    about = "Load the renewables demo data set into PostgreSQL",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `RENEWABLES_DATABASE_URL`, then
    /// `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Assume the schema is already current.
    #[arg(long = "skip-migrations")]
    skip_migrations: bool,
}

fn resolve_database_url(cli: Option<String>) -> Result<String> {
    cli.into_iter()
        .chain(DATABASE_URL_ENVS.iter().filter_map(|name| env::var(name).ok()))
        .find(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            eyre!("no database configured; pass --database-url or set RENEWABLES_DATABASE_URL")
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let url = resolve_database_url(args.database_url)?;

    if args.skip_migrations {
        info!("skipping schema migrations");
    } else {
        let migration_url = url.clone();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
            .await
            .wrap_err("migration task panicked")??;
        info!(applied, "schema up to date");
    }

    let pool = DbPool::new(PoolConfig::new(url))
        .await
        .wrap_err("failed to connect to database")?;
    let dataset = DemoDataset::embedded().wrap_err("embedded demo data set is invalid")?;
    let outcome = DemoDataSeeder::new(diesel_storage_ports(pool))
        .seed(&dataset)
        .await
        .wrap_err("failed to seed demo data")?;

    info!(
        inserted = outcome.inserted(),
        skipped = outcome.skipped(),
        "demo data seeded"
    );
    Ok(())
}
