pub mod display;
pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use errors::CoreError;
use models::{
    candle::{Resolution, StockCandle},
    dashboard::DashboardSnapshot,
    holding::Holding,
    news::NewsArticle,
    portfolio::{PortfolioDetail, PortfolioSummary},
    settings::Settings,
    stock::{StockDetails, StockSearchResult},
    valuation::Valuation,
};
use providers::{
    in_memory_store::InMemoryPortfolioStore,
    simulated::SimulatedMarketData,
    traits::{MarketDataProvider, PortfolioStore},
};
use services::{dashboard_service::DashboardService, valuation_service::ValuationService};

/// Longest accepted ticker, e.g. "BRK.A" or "^GSPC" fit comfortably.
const MAX_SYMBOL_LEN: usize = 12;

/// Lookback used when a chart is opened without an explicit range.
const DEFAULT_CANDLE_LOOKBACK_DAYS: i64 = 365;

/// Main entry point for the Finport core library.
/// Holds the settings, the two backends and the services built on them.
#[must_use]
pub struct Finport {
    settings: Settings,
    market: Arc<dyn MarketDataProvider>,
    store: Arc<dyn PortfolioStore>,
    dashboard_service: DashboardService,
    valuation_service: ValuationService,
}

impl std::fmt::Debug for Finport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finport")
            .field("settings", &self.settings)
            .field("market", &self.market.name())
            .finish()
    }
}

impl Finport {
    /// Build over the simulated market and the demo portfolios.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let market: Arc<dyn MarketDataProvider> = Arc::new(SimulatedMarketData::new(&settings));
        let store: Arc<dyn PortfolioStore> = Arc::new(InMemoryPortfolioStore::with_fixtures(
            market.clone(),
            &settings.user_id,
            settings.currency.clone(),
        )?);
        Self::with_providers(settings, market, store)
    }

    /// Build over caller-supplied backends (real APIs, test doubles).
    pub fn with_providers(
        settings: Settings,
        market: Arc<dyn MarketDataProvider>,
        store: Arc<dyn PortfolioStore>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let dashboard_service =
            DashboardService::new(market.clone(), store.clone(), settings.user_id.clone());

        Ok(Self {
            settings,
            market,
            store,
            dashboard_service,
            valuation_service: ValuationService::new(),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Stocks ──────────────────────────────────────────────────────

    /// Search by symbol or name (case-insensitive). An empty query returns
    /// the popular subset.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<StockSearchResult>, CoreError> {
        self.market.search_symbols(query).await
    }

    /// Quote for `symbol`, or `None` when the symbol is unknown.
    /// Malformed symbols are rejected before reaching the backend.
    pub async fn get_stock_details(&self, symbol: &str) -> Result<Option<StockDetails>, CoreError> {
        let symbol = validate_symbol(symbol)?;
        self.market.get_quote(&symbol).await
    }

    /// Candle series for `symbol` between two unix timestamps.
    pub async fn get_candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Result<Vec<StockCandle>, CoreError> {
        let symbol = validate_symbol(symbol)?;
        if from > to {
            return Err(CoreError::ValidationError(format!(
                "'from' ({from}) must not be after 'to' ({to})"
            )));
        }
        self.market.get_candles(&symbol, resolution, from, to).await
    }

    /// Daily candles covering the last year, ending now.
    pub async fn get_default_candles(&self, symbol: &str) -> Result<Vec<StockCandle>, CoreError> {
        let to = Utc::now();
        let from = to - Duration::days(DEFAULT_CANDLE_LOOKBACK_DAYS);
        self.get_candles(symbol, Resolution::Day, from.timestamp(), to.timestamp())
            .await
    }

    // ── News ────────────────────────────────────────────────────────

    pub async fn get_news(
        &self,
        category: &str,
        query: Option<&str>,
    ) -> Result<Vec<NewsArticle>, CoreError> {
        self.market.get_news(category, query).await
    }

    // ── Portfolios ──────────────────────────────────────────────────

    /// Summaries of the configured user's portfolios.
    pub async fn list_portfolios(&self) -> Result<Vec<PortfolioSummary>, CoreError> {
        self.store.list_portfolios(&self.settings.user_id).await
    }

    /// Detail with holdings, ledger and valuation; `None` for an unknown id.
    pub async fn get_portfolio_detail(
        &self,
        portfolio_id: u64,
    ) -> Result<Option<PortfolioDetail>, CoreError> {
        self.store.get_portfolio_detail(portfolio_id).await
    }

    /// Value arbitrary holdings at caller-supplied prices.
    #[must_use]
    pub fn value_holdings(&self, priced: &[(Holding, f64)]) -> Valuation {
        self.valuation_service.value_holdings(priced)
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Load every dashboard section concurrently. Cancel `cancel` when the
    /// consumer goes away; pending sections then resolve to `Cancelled`.
    pub async fn load_dashboard(&self, cancel: &CancellationToken) -> DashboardSnapshot {
        self.dashboard_service.load(cancel).await
    }
}

/// Trim and uppercase a ticker, rejecting anything that can't be one.
pub fn validate_symbol(symbol: &str) -> Result<String, CoreError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError("Symbol must not be empty".to_string()));
    }
    if trimmed.len() > MAX_SYMBOL_LEN {
        return Err(CoreError::ValidationError(format!(
            "Symbol '{trimmed}' is longer than {MAX_SYMBOL_LEN} characters"
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '^' | '-' | '='))
    {
        return Err(CoreError::ValidationError(format!(
            "Symbol '{trimmed}' contains invalid characters"
        )));
    }
    Ok(trimmed.to_uppercase())
}
