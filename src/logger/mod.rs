//! Logger initialization module.
//!
//! Configures tracing-based logging with pretty or JSON output. The
//! `RUST_LOG` environment variable takes precedence over the config file
//! setting.

mod config;

pub(crate) use config::{LogFormat, LoggerConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger with the given configuration.
pub(crate) fn initialize(logger_config: &LoggerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logger_config.level));

    match logger_config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json();

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
    }
}
