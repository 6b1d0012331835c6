//! Logging Config

use clap::Args;

/// Targets that are noisy at `info` and kept at `warn`.
const QUIET_TARGETS: [&str; 2] = ["h2", "hyper"];

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Level for statements logged by the Postgres catalog store.
    #[arg(long, env = "SQL_LOG_LEVEL", default_value = "warn")]
    pub sql_log_level: String,

    /// Threshold for slow request warnings.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives for the subscriber.
    ///
    /// Directives already present in `log_level` win over the defaults added
    /// here, so `RUST_LOG=info,sqlx=debug` keeps statement logging on.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = vec![self.log_level.clone()];

        let named = |target: &str| {
            self.log_level
                .split(',')
                .any(|directive| directive.trim().split('=').next() == Some(target))
        };

        for target in QUIET_TARGETS {
            if !named(target) {
                directives.push(format!("{target}=warn"));
            }
        }

        if !named("sqlx") {
            directives.push(format!("sqlx={}", self.sql_log_level));
        }

        directives.join(",")
    }
}
