use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A portfolio's current position in one stock.
///
/// Construct through [`Holding::new`], which enforces `quantity >= 0` and
/// `average_buy_price > 0`. Referential checks (portfolio and stock exist)
/// are the job of whichever store accepts the holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: u64,
    pub portfolio_id: u64,
    pub stock_id: u64,
    pub quantity: f64,
    pub average_buy_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    pub fn new(
        id: u64,
        portfolio_id: u64,
        stock_id: u64,
        quantity: f64,
        average_buy_price: f64,
    ) -> Result<Self, CoreError> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Holding quantity must be finite and non-negative, got {quantity}"
            )));
        }
        if !average_buy_price.is_finite() || average_buy_price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Average buy price must be finite and positive, got {average_buy_price}"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            portfolio_id,
            stock_id,
            quantity,
            average_buy_price,
            created_at: now,
            updated_at: now,
        })
    }

    /// quantity × average_buy_price
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_buy_price
    }

    /// quantity × `current_price`
    pub fn current_value(&self, current_price: f64) -> f64 {
        self.quantity * current_price
    }
}
