//! Catalog Backend Config

use std::{path::PathBuf, time::Duration};

use clap::Args;

use catalog_app::context::{AppInitError, Backend};

/// Catalog backend settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// YAML catalog fixture, used when no database is configured
    #[arg(long, env = "CATALOG_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Upper bound on each store call in milliseconds
    #[arg(long, env = "QUERY_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub query_timeout_ms: u64,
}

impl CatalogConfig {
    /// The configured backend, preferring the database.
    ///
    /// # Errors
    ///
    /// Returns an error when neither backend is configured.
    pub fn backend(&self) -> Result<Backend, AppInitError> {
        Backend::select(self.database_url.clone(), self.fixture.clone())
    }

    /// Deadline applied to every store call.
    #[must_use]
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
