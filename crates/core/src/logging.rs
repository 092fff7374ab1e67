use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::CoreError;
use crate::models::settings::Settings;

/// Console logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "finport_core=debug"
    pub log_level: String,
    /// Disable ANSI colours (for CI logs)
    pub plain: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            plain: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            plain: std::env::var("FINPORT_PLAIN_LOGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            log_level: settings.log_level.clone(),
            ..Self::default()
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed, so hosts and
/// tests may call this more than once.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, CoreError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level).map_err(|e| {
        CoreError::Config(format!("Invalid log filter '{}': {e}", config.log_level))
    })?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(!config.plain))
        .try_init()
        .is_ok();

    Ok(installed)
}
