//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `RENEWABLES_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const FALLBACK_DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Error raised when the configured host is not an IP address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid host address '{host}'")]
pub struct InvalidHostError {
    pub host: String,
}

/// Settings controlling the HTTP server and storage selection.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RENEWABLES")]
pub struct ServerSettings {
    /// Listen address.
    pub host: Option<String>,
    /// Listen port.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Load the demo data set at startup.
    pub seed_demo_data: Option<bool>,
    /// Apply pending schema migrations before serving.
    pub run_migrations: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|url| !url.trim().is_empty())
}

impl ServerSettings {
    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`InvalidHostError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHostError> {
        let ip = match self.host.as_deref() {
            None => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|_| InvalidHostError {
                host: host.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as absent.
    pub fn database_url(&self) -> Option<String> {
        non_blank(self.database_url.clone())
            .or_else(|| non_blank(std::env::var(FALLBACK_DATABASE_URL_ENV).ok()))
    }

    /// Whether to seed demo data. Defaults on for the in-memory backend and
    /// off for PostgreSQL.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
            .unwrap_or_else(|| self.database_url().is_none())
    }

    /// Whether to apply migrations at startup. Defaults off.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 6] = [
        "RENEWABLES_HOST",
        "RENEWABLES_PORT",
        "RENEWABLES_DATABASE_URL",
        "RENEWABLES_SEED_DEMO_DATA",
        "RENEWABLES_RUN_MIGRATIONS",
        "DATABASE_URL",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    fn with_env(overrides: &[(&str, &str)]) -> [(&'static str, Option<String>); 6] {
        VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        })
    }

    #[rstest]
    fn defaults_select_memory_backend_with_demo_data() {
        let _guard = lock_env(with_env(&[]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.database_url(), None);
        assert!(settings.seed_demo_data());
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(with_env(&[
            ("RENEWABLES_HOST", "127.0.0.1"),
            ("RENEWABLES_PORT", "9090"),
            ("RENEWABLES_DATABASE_URL", "postgres://db/renewables"),
            ("RENEWABLES_RUN_MIGRATIONS", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid host"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://db/renewables")
        );
        assert!(!settings.seed_demo_data());
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn database_url_falls_back_to_generic_variable() {
        let _guard = lock_env(with_env(&[("DATABASE_URL", "postgres://fallback/db")]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://fallback/db")
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_database_urls_count_as_absent(#[case] blank: &str) {
        let _guard = lock_env(with_env(&[
            ("RENEWABLES_DATABASE_URL", blank),
            ("DATABASE_URL", blank),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), None);
        assert!(settings.seed_demo_data());
    }

    #[rstest]
    fn explicit_seed_flag_wins_over_backend_default() {
        let settings = ServerSettings {
            database_url: Some("postgres://db/renewables".to_owned()),
            seed_demo_data: Some(true),
            ..ServerSettings::default()
        };
        assert!(settings.seed_demo_data());
    }

    #[rstest]
    fn non_ip_hosts_are_rejected() {
        let settings = ServerSettings {
            host: Some("dashboard.local".to_owned()),
            ..ServerSettings::default()
        };
        let err = settings.bind_addr().expect_err("hostname is not an ip");
        assert_eq!(err.host, "dashboard.local");
    }
}
