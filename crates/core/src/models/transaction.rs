use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Type of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "buy"),
            TransactionType::Sell => write!(f, "sell"),
            TransactionType::Dividend => write!(f, "dividend"),
        }
    }
}

/// An immutable buy/sell/dividend record.
///
/// Fields are private to the crate's write path: once built, a transaction
/// can be read and cloned but never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: u64,
    portfolio_id: u64,
    stock_id: u64,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    quantity: f64,
    price_per_unit: f64,
    transaction_date: DateTime<Utc>,
    #[serde(default)]
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: u64,
        portfolio_id: u64,
        stock_id: u64,
        transaction_type: TransactionType,
        quantity: f64,
        price_per_unit: f64,
        transaction_date: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Transaction quantity must be finite and positive, got {quantity}"
            )));
        }
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Price per unit must be finite and non-negative, got {price_per_unit}"
            )));
        }

        Ok(Self {
            id,
            portfolio_id,
            stock_id,
            transaction_type,
            quantity,
            price_per_unit,
            transaction_date,
            notes: None,
            created_at: Utc::now(),
        })
    }

    /// Attach notes while building. Consumes `self`, so it cannot be used
    /// to edit a transaction already held by a ledger.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn portfolio_id(&self) -> u64 {
        self.portfolio_id
    }

    pub fn stock_id(&self) -> u64 {
        self.stock_id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    pub fn transaction_date(&self) -> DateTime<Utc> {
        self.transaction_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// quantity × price_per_unit
    pub fn total(&self) -> f64 {
        self.quantity * self.price_per_unit
    }
}

/// Append-only transaction log. There is no API to update or remove entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Ids must be unique within the ledger.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        if self.entries.iter().any(|t| t.id == transaction.id) {
            return Err(CoreError::ValidationError(format!(
                "Transaction id {} already recorded",
                transaction.id
            )));
        }
        self.entries.push(transaction);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// Entries belonging to one portfolio, in insertion order.
    pub fn for_portfolio(&self, portfolio_id: u64) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|t| t.portfolio_id == portfolio_id)
            .cloned()
            .collect()
    }

    /// Highest id in use, or 0 for an empty ledger.
    pub fn max_id(&self) -> u64 {
        self.entries.iter().map(|t| t.id).max().unwrap_or(0)
    }
}
