use rand::Rng;

use crate::errors::CoreError;
use crate::models::candle::{Resolution, StockCandle};

/// Maximum number of bars in one generated series.
pub const MAX_CANDLES: i64 = 5000;

/// Generates random-walk OHLCV series for placeholder charts.
///
/// The RNG is injected so tests can pass a seeded `StdRng`.
pub struct CandleService;

impl CandleService {
    pub fn new() -> Self {
        Self
    }

    /// Generate bars at `from`, `from + step`, ... while the bar start is `<= to`.
    ///
    /// Every bar satisfies `low <= open, close <= high`. `from > to` is a
    /// validation error rather than an empty series.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Result<Vec<StockCandle>, CoreError> {
        let count = Self::bar_count(resolution, from, to)?;
        let step = resolution.step_seconds();

        let mut candles = Vec::with_capacity(count);
        let mut last_close: f64 = rng.gen_range(50.0..250.0);
        let mut date = from;

        for _ in 0..count {
            // open drifts up to ±2.5% from the previous close, close up to ±5% from open
            let open = last_close * (1.0 + (rng.gen::<f64>() - 0.5) * 0.05);
            let close = open * (1.0 + (rng.gen::<f64>() - 0.5) * 0.1);
            let high = open.max(close) * (1.0 + rng.gen::<f64>() * 0.03);
            let low = open.min(close) * (1.0 - rng.gen::<f64>() * 0.03);
            let volume = rng.gen_range(500_000..1_500_000);

            candles.push(StockCandle {
                date,
                open,
                high,
                low,
                close,
                volume,
            });

            last_close = close;
            date += step;
        }

        Ok(candles)
    }

    /// Number of bars a request would produce, after validating the range.
    pub fn bar_count(resolution: Resolution, from: i64, to: i64) -> Result<usize, CoreError> {
        if from > to {
            return Err(CoreError::ValidationError(format!(
                "'from' ({from}) must not be after 'to' ({to})"
            )));
        }
        let span = to.checked_sub(from).ok_or_else(|| {
            CoreError::ValidationError(format!("Range {from}..{to} is too large"))
        })?;
        let count = span / resolution.step_seconds() + 1;
        if count > MAX_CANDLES {
            return Err(CoreError::ValidationError(format!(
                "Range would produce {count} {resolution} bars, exceeding the maximum of {MAX_CANDLES}"
            )));
        }
        Ok(count as usize)
    }
}

impl Default for CandleService {
    fn default() -> Self {
        Self::new()
    }
}
