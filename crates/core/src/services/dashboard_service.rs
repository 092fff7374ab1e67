use futures::future::try_join_all;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::dashboard::{DashboardSnapshot, Section};
use crate::models::news::NewsArticle;
use crate::models::portfolio::PortfolioSummary;
use crate::models::stock::{StockDetails, StockSearchResult};
use crate::providers::catalog::MARKET_INDEX_SYMBOLS;
use crate::providers::traits::{MarketDataProvider, PortfolioStore};

/// Rows in the trending-stocks table.
pub const TRENDING_COUNT: usize = 5;

/// Headlines in the latest-news card.
pub const NEWS_COUNT: usize = 3;

/// Loads the four dashboard sections concurrently.
///
/// Sections are independent: one failing or running slow never blocks or
/// fails the others, and there is no consistency between them. Cancelling
/// the token resolves every still-pending section to `Section::Cancelled`.
pub struct DashboardService {
    market: Arc<dyn MarketDataProvider>,
    store: Arc<dyn PortfolioStore>,
    user_id: String,
}

impl DashboardService {
    pub fn new(
        market: Arc<dyn MarketDataProvider>,
        store: Arc<dyn PortfolioStore>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            market,
            store,
            user_id: user_id.into(),
        }
    }

    pub async fn load(&self, cancel: &CancellationToken) -> DashboardSnapshot {
        info!(user_id = %self.user_id, "loading dashboard");

        let (market_overview, trending, latest_news, portfolio) = tokio::join!(
            Self::section("market_overview", cancel, self.market_overview()),
            Self::section("trending", cancel, self.trending()),
            Self::section("latest_news", cancel, self.latest_news()),
            Self::section("portfolio", cancel, self.portfolio_snapshot()),
        );

        DashboardSnapshot {
            market_overview,
            trending,
            latest_news,
            portfolio,
        }
    }

    /// Quotes for the tracked indices. Indices the backend doesn't know are dropped.
    pub async fn market_overview(&self) -> Result<Vec<StockDetails>, CoreError> {
        let quotes = try_join_all(
            MARKET_INDEX_SYMBOLS
                .iter()
                .map(|symbol| self.market.get_quote(symbol)),
        )
        .await?;
        Ok(quotes.into_iter().flatten().collect())
    }

    /// The popular-symbols subset, truncated for the table.
    pub async fn trending(&self) -> Result<Vec<StockSearchResult>, CoreError> {
        let mut results = self.market.search_symbols("").await?;
        results.truncate(TRENDING_COUNT);
        Ok(results)
    }

    pub async fn latest_news(&self) -> Result<Vec<NewsArticle>, CoreError> {
        let mut articles = self.market.get_news("general", None).await?;
        articles.truncate(NEWS_COUNT);
        Ok(articles)
    }

    /// The user's first portfolio, if any.
    pub async fn portfolio_snapshot(&self) -> Result<Option<PortfolioSummary>, CoreError> {
        let portfolios = self.store.list_portfolios(&self.user_id).await?;
        Ok(portfolios.into_iter().next())
    }

    async fn section<T, F>(name: &str, cancel: &CancellationToken, fetch: F) -> Section<T>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        match run_cancellable(cancel, fetch).await {
            Ok(value) => Section::Loaded(value),
            Err(CoreError::Cancelled) => {
                debug!(section = name, "dashboard section cancelled");
                Section::Cancelled
            }
            Err(e) => {
                warn!(section = name, error = %e, "dashboard section failed");
                Section::Failed(e.to_string())
            }
        }
    }
}

/// Drive `fetch` to completion unless `cancel` fires first, in which case
/// the fetch is dropped and `CoreError::Cancelled` is returned.
pub async fn run_cancellable<T, F>(cancel: &CancellationToken, fetch: F) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, CoreError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CoreError::Cancelled),
        result = fetch => result,
    }
}
