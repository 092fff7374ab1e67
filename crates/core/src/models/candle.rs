use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Bar width for a candle series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    Day,
    Week,
    /// Fixed 30-day buckets. This is an approximation, not calendar months.
    Month,
}

impl Resolution {
    /// Distance between consecutive bars, in seconds.
    pub fn step_seconds(&self) -> i64 {
        match self {
            Resolution::Day => SECONDS_PER_DAY,
            Resolution::Week => 7 * SECONDS_PER_DAY,
            Resolution::Month => 30 * SECONDS_PER_DAY,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Day => write!(f, "D"),
            Resolution::Week => write!(f, "W"),
            Resolution::Month => write!(f, "M"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "D" => Ok(Resolution::Day),
            "W" => Ok(Resolution::Week),
            "M" => Ok(Resolution::Month),
            other => Err(CoreError::ValidationError(format!(
                "Unknown resolution '{other}': expected D, W or M"
            ))),
        }
    }
}

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockCandle {
    /// Start of the bucket, unix seconds
    pub date: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl StockCandle {
    /// `low <= open, close <= high`
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}
