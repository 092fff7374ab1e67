use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::transaction::Transaction;
use super::valuation::{HoldingValuation, Valuation};

/// A named collection of holdings owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: u64,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn new(id: u64, user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Card-level view of a portfolio, as listed on the portfolios page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub id: u64,
    pub name: String,
    pub total_value: f64,
    pub total_profit_loss: f64,
    /// Already scaled: 13.8 means 13.8 %
    pub total_profit_loss_percentage: f64,
    pub currency: String,
}

impl PortfolioSummary {
    pub fn from_valuation(portfolio: &Portfolio, valuation: &Valuation, currency: &str) -> Self {
        Self {
            id: portfolio.id,
            name: portfolio.name.clone(),
            total_value: valuation.total_value,
            total_profit_loss: valuation.total_profit_loss,
            total_profit_loss_percentage: valuation.total_profit_loss_percentage,
            currency: currency.to_string(),
        }
    }
}

/// A portfolio with its holdings, ledger and derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub holdings: Vec<Holding>,
    pub transactions: Vec<Transaction>,
    pub total_value: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percentage: f64,
    /// Per-holding breakdown, same order as `holdings`
    pub holding_valuations: Vec<HoldingValuation>,
    pub currency: String,
}
