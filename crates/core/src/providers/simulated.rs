use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::candle::{Resolution, StockCandle};
use crate::models::news::NewsArticle;
use crate::models::settings::Settings;
use crate::models::stock::{SecurityType, Stock, StockDetails, StockSearchResult};
use crate::services::candle_service::CandleService;
use crate::services::search_service::SearchService;

use super::catalog;
use super::news_feed;
use super::traits::MarketDataProvider;

/// Stand-in for a real market data API.
///
/// - **Latency**: every call sleeps for the configured delay first.
/// - **Data**: quotes and candles are random on every call; news is a fixed
///   feed. Nothing links one quote's price to the next.
/// - **Determinism**: with `Settings.rng_seed` set, the sequence of generated
///   values is reproducible.
pub struct SimulatedMarketData {
    stocks: Vec<Stock>,
    indices: Vec<Stock>,
    search: SearchService,
    candles: CandleService,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedMarketData {
    pub fn new(settings: &Settings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            stocks: catalog::reference_stocks(),
            indices: catalog::market_indices(),
            search: SearchService::new(settings.default_search_limit),
            candles: CandleService::new(),
            latency: settings.simulated_latency(),
            rng: Mutex::new(rng),
        }
    }

    /// Replace the searchable stock universe.
    pub fn with_stocks(mut self, stocks: Vec<Stock>) -> Self {
        self.stocks = stocks;
        self
    }

    /// The searchable universe, in display order.
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// Case-insensitive lookup across stocks and indices.
    pub fn find(&self, symbol: &str) -> Option<&Stock> {
        let upper = symbol.trim().to_uppercase();
        self.stocks
            .iter()
            .chain(self.indices.iter())
            .find(|s| s.symbol == upper)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }

    fn quote_for(&self, stock: &Stock) -> StockDetails {
        let is_index = stock.security_type == SecurityType::Index;

        self.with_rng(|rng| {
            let previous_close: f64 = if is_index {
                rng.gen_range(1_000.0..40_000.0)
            } else {
                rng.gen_range(50.0..550.0)
            };
            let change_today_percent: f64 = rng.gen_range(-2.5..2.5);
            let change_today = previous_close * change_today_percent / 100.0;
            let current_price = previous_close + change_today;
            let open = previous_close * (1.0 + rng.gen_range(-0.01..0.01));
            let day_high = open.max(current_price) * (1.0 + rng.gen::<f64>() * 0.02);
            let day_low = open.min(current_price) * (1.0 - rng.gen::<f64>() * 0.02);
            let volume = rng.gen_range(0..10_000_000);

            let (market_cap, pe_ratio, eps, dividend_yield) = if is_index {
                (0.0, None, None, None)
            } else {
                (
                    rng.gen_range(1..2000) as f64 * 1e9,
                    Some(rng.gen_range(5.0..35.0)),
                    Some(rng.gen_range(1.0..11.0)),
                    Some(rng.gen_range(0.0..5.0)),
                )
            };

            let slug: String = stock
                .name
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();

            StockDetails {
                symbol: stock.symbol.clone(),
                name: stock.name.clone(),
                current_price,
                change_today,
                change_today_percent,
                previous_close,
                open,
                day_high,
                day_low,
                volume,
                market_cap,
                pe_ratio,
                eps,
                dividend_yield,
                sector: stock.sector.clone(),
                industry: stock.industry.clone(),
                exchange: stock.exchange.clone(),
                description: format!(
                    "Detailed description for {} ({}). This company is a leader in its field, innovating in various areas of technology and consumer products.",
                    stock.name, stock.symbol
                ),
                website: format!(
                    "https://www.{}.example.com",
                    stock.symbol.to_lowercase().replace('^', "")
                ),
                logo_url: format!("https://logo.clearbit.com/{slug}.com"),
            }
        })
    }
}

#[async_trait]
impl MarketDataProvider for SimulatedMarketData {
    fn name(&self) -> &str {
        "Simulated"
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<StockSearchResult>, CoreError> {
        debug!(query, "searching symbols");
        self.simulate_latency().await;

        Ok(self
            .search
            .filter(&self.stocks, query)
            .into_iter()
            .map(Stock::to_search_result)
            .collect())
    }

    async fn get_quote(&self, symbol: &str) -> Result<Option<StockDetails>, CoreError> {
        debug!(symbol, "fetching quote");
        self.simulate_latency().await;

        Ok(self.find(symbol).map(|stock| self.quote_for(stock)))
    }

    async fn get_candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> Result<Vec<StockCandle>, CoreError> {
        debug!(symbol, %resolution, from, to, "fetching candles");
        // Reject bad ranges before paying for latency
        CandleService::bar_count(resolution, from, to)?;
        self.simulate_latency().await;

        if self.find(symbol).is_none() {
            return Ok(Vec::new());
        }
        self.with_rng(|rng| self.candles.generate(rng, resolution, from, to))
    }

    async fn get_news(
        &self,
        category: &str,
        query: Option<&str>,
    ) -> Result<Vec<NewsArticle>, CoreError> {
        let query = query.filter(|q| !q.trim().is_empty());
        debug!(category, ?query, "fetching news");
        self.simulate_latency().await;

        let feed = news_feed::news_feed(category, query, chrono::Utc::now());
        Ok(match query {
            Some(q) => feed.into_iter().filter(|a| a.matches(q)).collect(),
            None => feed,
        })
    }
}
