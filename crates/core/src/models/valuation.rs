use serde::{Deserialize, Serialize};

/// Portfolio-level aggregates derived from holdings and current prices.
///
/// `total_profit_loss_percentage` is already scaled: 13.8 means 13.8 %.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Σ quantity × current_price
    pub total_value: f64,

    /// Σ (current_value − cost_basis)
    pub total_profit_loss: f64,

    /// total_profit_loss / Σ cost_basis × 100, or 0 when nothing was invested
    pub total_profit_loss_percentage: f64,
}

/// Valuation of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValuation {
    pub holding_id: u64,
    pub stock_id: u64,
    pub quantity: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub cost_basis: f64,
    pub profit_loss: f64,
    pub profit_loss_percentage: f64,
}

/// Totals together with the per-holding rows they were summed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    pub totals: Valuation,
    pub holdings: Vec<HoldingValuation>,
}
