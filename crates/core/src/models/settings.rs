use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::CoreError;

/// Runtime configuration for the dashboard core.
///
/// Passed explicitly to [`crate::Finport`] instead of living in globals.
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display currency for portfolio values (e.g., "USD").
    pub currency: String,

    /// User whose portfolios are listed on the dashboard.
    pub user_id: String,

    /// Artificial delay applied to every simulated backend call.
    pub simulated_latency_ms: u64,

    /// How many symbols an empty search returns.
    pub default_search_limit: usize,

    /// Fixed seed for simulated prices. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,

    /// `tracing` filter directive (same syntax as `RUST_LOG`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            user_id: "mock-user-id".to_string(),
            simulated_latency_ms: 800,
            default_search_limit: 10,
            rng_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Override fields from `FINPORT_LATENCY_MS`, `FINPORT_RNG_SEED`,
    /// `FINPORT_CURRENCY` and `RUST_LOG` when set.
    pub fn apply_env_overrides(self) -> Result<Self, CoreError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::apply_env_overrides`] with an injectable lookup.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("FINPORT_LATENCY_MS") {
            self.simulated_latency_ms = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("FINPORT_LATENCY_MS must be an integer, got '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup("FINPORT_RNG_SEED") {
            let seed = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("FINPORT_RNG_SEED must be an integer, got '{raw}'"))
            })?;
            self.rng_seed = Some(seed);
        }
        if let Some(currency) = lookup("FINPORT_CURRENCY") {
            self.currency = currency;
        }
        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = level;
        }

        self.currency = self.currency.trim().to_uppercase();
        self.validate()?;
        Ok(self)
    }

    /// Currency must be exactly 3 ASCII letters; search limit must be positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Config(format!(
                "Invalid currency code '{}': must be exactly 3 ASCII letters (e.g., USD, EUR, PLN)",
                self.currency
            )));
        }
        if self.default_search_limit == 0 {
            return Err(CoreError::Config(
                "default_search_limit must be at least 1".to_string(),
            ));
        }
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Config("user_id must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
