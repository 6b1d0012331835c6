//! Server configuration module

use clap::Parser;

use crate::config::{catalog::CatalogConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod server;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog backend settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["catalog-json"])?;

        assert_eq!(config.server.port, 8698);
        assert_eq!(config.catalog.query_timeout(), Duration::from_millis(5_000));

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--fixture",
            "fixtures/catalog.yaml",
            "--query-timeout-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.catalog.query_timeout(), Duration::from_millis(250));

        Ok(())
    }
}
