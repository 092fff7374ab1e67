use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::candle::{Resolution, StockCandle};
use crate::models::news::NewsArticle;
use crate::models::portfolio::{PortfolioDetail, PortfolioSummary};
use crate::models::stock::{StockDetails, StockSearchResult};

/// Market data backend: symbol search, quotes, candles and news.
///
/// The simulated provider implements this today; a REST market-data client
/// would implement the same trait and nothing above it changes.
/// Unknown symbols are `Ok(None)` / empty, never an error.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Case-insensitive substring search over symbol and name.
    /// An empty query returns the default popular subset.
    async fn search_symbols(&self, query: &str) -> Result<Vec<StockSearchResult>, CoreError>;

    /// Latest quote, or `None` for an unknown symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Option<StockDetails>, CoreError>;

    /// Chronological OHLCV bars from `from` to at most `to` (unix seconds).
    async fn get_candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Result<Vec<StockCandle>, CoreError>;

    /// News for a category, optionally filtered by `query`.
    async fn get_news(
        &self,
        category: &str,
        query: Option<&str>,
    ) -> Result<Vec<NewsArticle>, CoreError>;
}

/// Portfolio persistence backend.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Summaries of every portfolio owned by `user_id`.
    async fn list_portfolios(&self, user_id: &str) -> Result<Vec<PortfolioSummary>, CoreError>;

    /// Full detail with valuation, or `None` for an unknown id.
    async fn get_portfolio_detail(
        &self,
        portfolio_id: u64,
    ) -> Result<Option<PortfolioDetail>, CoreError>;
}
