use thiserror::Error;

/// Unified error type for the entire finport-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Unknown symbols and portfolio ids on read paths are NOT errors: those
/// operations return `Ok(None)` or an empty list so callers can render an
/// empty state. The not-found variants below are used when a write would
/// reference a missing entity.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Stock not found: {0}")]
    StockNotFound(String),

    #[error("Portfolio not found: {0}")]
    PortfolioNotFound(u64),

    // ── Backend ─────────────────────────────────────────────────────
    #[error("Provider error ({provider}): {message}")]
    Provider {
        provider: String,
        message: String,
    },

    #[error("Operation cancelled")]
    Cancelled,

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
