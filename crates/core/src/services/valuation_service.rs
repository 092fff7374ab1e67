use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::valuation::{HoldingValuation, Valuation, ValuationBreakdown};

/// Computes portfolio aggregates from holdings and their current prices.
///
/// Pure business logic: no I/O, no API calls. Sums are accumulated in input
/// order, so `total_value` equals Σ quantity × price evaluated the same way.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate totals for `(holding, current_price)` pairs.
    pub fn value_holdings(&self, priced: &[(Holding, f64)]) -> Valuation {
        self.value_holdings_detailed(priced).totals
    }

    /// Totals plus one row per holding.
    pub fn value_holdings_detailed(&self, priced: &[(Holding, f64)]) -> ValuationBreakdown {
        let mut total_value = 0.0;
        let mut total_profit_loss = 0.0;
        let mut total_cost_basis = 0.0;
        let mut rows = Vec::with_capacity(priced.len());

        for (holding, price) in priced {
            let current_value = holding.current_value(*price);
            let cost_basis = holding.cost_basis();
            let profit_loss = current_value - cost_basis;

            total_value += current_value;
            total_profit_loss += profit_loss;
            total_cost_basis += cost_basis;

            rows.push(HoldingValuation {
                holding_id: holding.id,
                stock_id: holding.stock_id,
                quantity: holding.quantity,
                current_price: *price,
                current_value,
                cost_basis,
                profit_loss,
                profit_loss_percentage: Self::percentage(profit_loss, cost_basis),
            });
        }

        ValuationBreakdown {
            totals: Valuation {
                total_value,
                total_profit_loss,
                total_profit_loss_percentage: Self::percentage(total_profit_loss, total_cost_basis),
            },
            holdings: rows,
        }
    }

    /// `part / base × 100`, defined as 0 when `base` is 0.
    pub fn percentage(part: f64, base: f64) -> f64 {
        if base == 0.0 {
            0.0
        } else {
            part / base * 100.0
        }
    }

    /// Reject prices that would poison the totals.
    pub fn validate_price(symbol: &str, price: f64) -> Result<f64, CoreError> {
        if !price.is_finite() || price < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Invalid price for {symbol}: {price} (must be finite and non-negative)"
            )));
        }
        Ok(price)
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
