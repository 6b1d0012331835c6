//! App Context

use std::{fmt, path::PathBuf, sync::Arc, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::catalog::{CatalogQueryService, CatalogService, DEFAULT_QUERY_TIMEOUT},
    memory::{FixtureError, MemoryCatalog},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to load catalog fixture {path}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: FixtureError,
    },

    #[error("no catalog backend configured; set DATABASE_URL or CATALOG_FIXTURE")]
    NoBackend,
}

/// Where catalog data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Database(String),
    Fixture(PathBuf),
}

impl Backend {
    /// Pick a backend, preferring the database when both are configured.
    ///
    /// # Errors
    ///
    /// Returns an error when neither is configured.
    pub fn select(
        database_url: Option<String>,
        fixture: Option<PathBuf>,
    ) -> Result<Self, AppInitError> {
        match (database_url, fixture) {
            (Some(url), _) => Ok(Self::Database(url)),
            (None, Some(path)) => Ok(Self::Fixture(path)),
            (None, None) => Err(AppInitError::NoBackend),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Database(_) => "postgres",
            Self::Fixture(_) => "memory",
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub backend: &'static str,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context for `backend` with the default query timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or loading the fixture
    /// fails.
    pub async fn connect(backend: &Backend) -> Result<Self, AppInitError> {
        Self::connect_with_timeout(backend, DEFAULT_QUERY_TIMEOUT).await
    }

    /// Build application context for `backend`, bounding each store call by
    /// `query_timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or loading the fixture
    /// fails.
    pub async fn connect_with_timeout(
        backend: &Backend,
        query_timeout: Duration,
    ) -> Result<Self, AppInitError> {
        let service = match backend {
            Backend::Database(url) => {
                let pool = database::connect(url)
                    .await
                    .map_err(AppInitError::Database)?;

                CatalogQueryService::from_db(Db::new(pool))
            }
            Backend::Fixture(path) => {
                let catalog =
                    MemoryCatalog::from_path(path).map_err(|source| AppInitError::Fixture {
                        path: path.clone(),
                        source,
                    })?;

                info!(
                    categories = catalog.category_count(),
                    products = catalog.product_count(),
                    "loaded catalog fixture"
                );

                CatalogQueryService::from_memory(catalog)
            }
        };

        Ok(Self {
            catalog: Arc::new(service.with_query_timeout(query_timeout)),
            backend: backend.name(),
        })
    }

    /// Wrap an existing service, as tests do with mocks.
    #[must_use]
    pub fn from_service(catalog: Arc<dyn CatalogService>, backend: &'static str) -> Self {
        Self { catalog, backend }
    }
}
