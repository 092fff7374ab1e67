use async_trait::async_trait;
use chrono::{Duration, Utc};
use futures::future::try_join_all;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::{Portfolio, PortfolioDetail, PortfolioSummary};
use crate::models::stock::{SecurityType, Stock};
use crate::models::transaction::{Transaction, TransactionLedger, TransactionType};
use crate::models::valuation::ValuationBreakdown;
use crate::services::valuation_service::ValuationService;

use super::catalog;
use super::traits::{MarketDataProvider, PortfolioStore};

#[derive(Debug, Default)]
struct StoreState {
    portfolios: Vec<Portfolio>,
    holdings: Vec<Holding>,
    ledger: TransactionLedger,
}

/// Portfolio backend kept in memory.
///
/// Every insert checks the data-model invariants: holdings and transactions
/// must reference an existing portfolio and an existing (holdable) stock,
/// and the ledger only ever grows. Current prices for valuation come from
/// the injected market data provider.
pub struct InMemoryPortfolioStore {
    market: Arc<dyn MarketDataProvider>,
    stocks: Vec<Stock>,
    currency: String,
    valuation_service: ValuationService,
    state: RwLock<StoreState>,
}

impl InMemoryPortfolioStore {
    /// Create an empty store over the reference stock universe.
    pub fn new(market: Arc<dyn MarketDataProvider>, currency: impl Into<String>) -> Self {
        Self::with_stocks(market, catalog::reference_stocks(), currency)
    }

    /// Create an empty store over a custom stock universe.
    pub fn with_stocks(
        market: Arc<dyn MarketDataProvider>,
        stocks: Vec<Stock>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            market,
            stocks,
            currency: currency.into(),
            valuation_service: ValuationService::new(),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Create a store pre-loaded with the demo portfolios for `user_id`.
    pub fn with_fixtures(
        market: Arc<dyn MarketDataProvider>,
        user_id: &str,
        currency: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let store = Self::new(market, currency);
        let now = Utc::now();
        let days_ago = |days: i64| now - Duration::days(days);

        let mut tech = Portfolio::new(1, user_id, "Tech Growth")
            .with_description("Details for Tech Growth");
        tech.created_at = days_ago(365);
        store.add_portfolio(tech)?;

        let mut retirement = Portfolio::new(2, user_id, "Retirement")
            .with_description("Details for Retirement");
        retirement.created_at = days_ago(730);
        store.add_portfolio(retirement)?;

        // Tech Growth: AAPL, MSFT, NVDA
        store.add_holding(Holding::new(1, 1, 1, 50.0, 150.0)?)?;
        store.add_holding(Holding::new(2, 1, 2, 30.0, 280.0)?)?;
        store.add_holding(Holding::new(3, 1, 6, 20.0, 450.0)?)?;
        store.record_transaction(Transaction::new(1, 1, 1, TransactionType::Buy, 25.0, 140.0, days_ago(60))?)?;
        store.record_transaction(Transaction::new(2, 1, 1, TransactionType::Buy, 25.0, 160.0, days_ago(30))?)?;
        store.record_transaction(Transaction::new(3, 1, 2, TransactionType::Buy, 30.0, 280.0, days_ago(90))?)?;
        store.record_transaction(Transaction::new(4, 1, 6, TransactionType::Buy, 20.0, 450.0, days_ago(10))?)?;

        // Retirement: JPM, V, GOOGL
        store.add_holding(Holding::new(4, 2, 9, 40.0, 145.0)?)?;
        store.add_holding(Holding::new(5, 2, 10, 25.0, 230.0)?)?;
        store.add_holding(Holding::new(6, 2, 3, 15.0, 120.0)?)?;
        store.record_transaction(Transaction::new(5, 2, 9, TransactionType::Buy, 40.0, 145.0, days_ago(400))?)?;
        store.record_transaction(Transaction::new(6, 2, 10, TransactionType::Buy, 25.0, 230.0, days_ago(300))?)?;
        store.record_transaction(Transaction::new(7, 2, 3, TransactionType::Buy, 20.0, 118.0, days_ago(200))?)?;
        store.record_transaction(
            Transaction::new(8, 2, 3, TransactionType::Sell, 5.0, 140.0, days_ago(100))?
                .with_notes("Trimmed position"),
        )?;
        store.record_transaction(Transaction::new(9, 2, 9, TransactionType::Dividend, 40.0, 1.05, days_ago(45))?)?;

        Ok(store)
    }

    /// Add a portfolio. Ids must be unique.
    pub fn add_portfolio(&self, portfolio: Portfolio) -> Result<(), CoreError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.portfolios.iter().any(|p| p.id == portfolio.id) {
            return Err(CoreError::ValidationError(format!(
                "Portfolio id {} already exists",
                portfolio.id
            )));
        }
        state.portfolios.push(portfolio);
        Ok(())
    }

    /// Add a holding after checking that its portfolio and stock exist.
    /// A portfolio holds at most one position per stock.
    pub fn add_holding(&self, holding: Holding) -> Result<(), CoreError> {
        self.holdable_stock(holding.stock_id)?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if !state.portfolios.iter().any(|p| p.id == holding.portfolio_id) {
            return Err(CoreError::PortfolioNotFound(holding.portfolio_id));
        }
        if state.holdings.iter().any(|h| h.id == holding.id) {
            return Err(CoreError::ValidationError(format!(
                "Holding id {} already exists",
                holding.id
            )));
        }
        if state
            .holdings
            .iter()
            .any(|h| h.portfolio_id == holding.portfolio_id && h.stock_id == holding.stock_id)
        {
            return Err(CoreError::ValidationError(format!(
                "Portfolio {} already holds stock {}",
                holding.portfolio_id, holding.stock_id
            )));
        }
        state.holdings.push(holding);
        Ok(())
    }

    /// Append a transaction to the ledger after checking its references.
    pub fn record_transaction(&self, transaction: Transaction) -> Result<(), CoreError> {
        self.holdable_stock(transaction.stock_id())?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if !state.portfolios.iter().any(|p| p.id == transaction.portfolio_id()) {
            return Err(CoreError::PortfolioNotFound(transaction.portfolio_id()));
        }
        state.ledger.append(transaction)
    }

    /// Next free transaction id.
    pub fn next_transaction_id(&self) -> u64 {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.ledger.max_id() + 1
    }

    /// Number of ledger entries across all portfolios.
    pub fn transaction_count(&self) -> usize {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.ledger.len()
    }

    fn stock_by_id(&self, stock_id: u64) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.id == stock_id)
    }

    fn holdable_stock(&self, stock_id: u64) -> Result<&Stock, CoreError> {
        let stock = self
            .stock_by_id(stock_id)
            .ok_or_else(|| CoreError::StockNotFound(format!("id {stock_id}")))?;
        if stock.security_type != SecurityType::CommonStock {
            return Err(CoreError::ValidationError(format!(
                "{} is not a holdable security",
                stock.symbol
            )));
        }
        Ok(stock)
    }

    /// Price every holding concurrently and run the valuation.
    async fn value(&self, holdings: Vec<Holding>) -> Result<ValuationBreakdown, CoreError> {
        let quotes = holdings.iter().map(|holding| async move {
            let stock = self.holdable_stock(holding.stock_id)?;
            let quote = self
                .market
                .get_quote(&stock.symbol)
                .await?
                .ok_or_else(|| CoreError::StockNotFound(stock.symbol.clone()))?;
            ValuationService::validate_price(&stock.symbol, quote.current_price)
        });
        let prices = try_join_all(quotes).await?;

        let priced: Vec<(Holding, f64)> = holdings.into_iter().zip(prices).collect();
        Ok(self.valuation_service.value_holdings_detailed(&priced))
    }

    fn holdings_for(&self, portfolio_id: u64) -> Vec<Holding> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state
            .holdings
            .iter()
            .filter(|h| h.portfolio_id == portfolio_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn list_portfolios(&self, user_id: &str) -> Result<Vec<PortfolioSummary>, CoreError> {
        debug!(user_id, "listing portfolios");
        let portfolios: Vec<Portfolio> = {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            state
                .portfolios
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect()
        };

        let mut summaries = Vec::with_capacity(portfolios.len());
        for portfolio in &portfolios {
            let breakdown = self.value(self.holdings_for(portfolio.id)).await?;
            summaries.push(PortfolioSummary::from_valuation(
                portfolio,
                &breakdown.totals,
                &self.currency,
            ));
        }
        Ok(summaries)
    }

    async fn get_portfolio_detail(
        &self,
        portfolio_id: u64,
    ) -> Result<Option<PortfolioDetail>, CoreError> {
        debug!(portfolio_id, "fetching portfolio detail");
        let (portfolio, transactions) = {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            match state.portfolios.iter().find(|p| p.id == portfolio_id) {
                Some(p) => (p.clone(), state.ledger.for_portfolio(portfolio_id)),
                None => return Ok(None),
            }
        };

        let holdings = self.holdings_for(portfolio_id);
        let breakdown = self.value(holdings.clone()).await?;

        Ok(Some(PortfolioDetail {
            portfolio,
            holdings,
            transactions,
            total_value: breakdown.totals.total_value,
            total_profit_loss: breakdown.totals.total_profit_loss,
            total_profit_loss_percentage: breakdown.totals.total_profit_loss_percentage,
            holding_valuations: breakdown.holdings,
            currency: self.currency.clone(),
        }))
    }
}
