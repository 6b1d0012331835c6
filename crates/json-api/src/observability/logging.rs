//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::{ObservabilityError, settings};

/// Install the global subscriber and apply request logging settings.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    settings::set_slow_request_threshold_ms(config.slow_request_threshold_ms);

    match config.log_format {
        LogFormat::Compact => install(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        ),
        LogFormat::Json => install(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
        ),
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::new(config.filter_directives())
}

fn install<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(config))
        .try_init()?;

    Ok(())
}
