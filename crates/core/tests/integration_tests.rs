// ═══════════════════════════════════════════════════════════════════
// Integration Tests — Finport facade over the simulated backends
// ═══════════════════════════════════════════════════════════════════

use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use finport_core::errors::CoreError;
use finport_core::logging::{init_logging, LoggingConfig};
use finport_core::models::candle::Resolution;
use finport_core::models::holding::Holding;
use finport_core::models::settings::Settings;
use finport_core::providers::in_memory_store::InMemoryPortfolioStore;
use finport_core::providers::simulated::SimulatedMarketData;
use finport_core::providers::traits::{MarketDataProvider, PortfolioStore};
use finport_core::{validate_symbol, Finport};

const DAY: i64 = 86_400;

fn settings() -> Settings {
    Settings {
        simulated_latency_ms: 0,
        rng_seed: Some(42),
        ..Settings::default()
    }
}

fn app() -> Finport {
    Finport::new(settings()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn rejects_invalid_settings() {
    let bad = Settings {
        currency: "dollars".into(),
        ..settings()
    };
    assert!(matches!(Finport::new(bad.clone()), Err(CoreError::Config(_))));

    let market: Arc<dyn MarketDataProvider> = Arc::new(SimulatedMarketData::new(&settings()));
    let store: Arc<dyn PortfolioStore> =
        Arc::new(InMemoryPortfolioStore::new(market.clone(), "USD"));
    assert!(matches!(
        Finport::with_providers(bad, market, store),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn debug_shows_backend_name() {
    let debug = format!("{:?}", app());
    assert!(debug.contains("Simulated"));
    assert_eq!(app().settings().currency, "USD");
}

// ═══════════════════════════════════════════════════════════════════
// Stocks
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn search_and_details() {
    let app = app();
    let results = app.search_stocks("apple").await.unwrap();
    assert_eq!(results.len(), 1);

    let details = app
        .get_stock_details(&results[0].symbol)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.symbol, "AAPL");
    assert_eq!(details.sector.as_deref(), Some("Technology"));
}

#[tokio::test]
async fn details_normalise_symbol() {
    let details = app().get_stock_details("  brk.a ").await.unwrap().unwrap();
    assert_eq!(details.symbol, "BRK.A");
}

#[tokio::test]
async fn details_unknown_symbol_is_none() {
    assert!(app().get_stock_details("ZZZZ").await.unwrap().is_none());
}

#[tokio::test]
async fn details_reject_malformed_symbol() {
    for bad in ["", "   ", "AA PL", "TOOLONGSYMBOL1", "AAPL;"] {
        let err = app().get_stock_details(bad).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)), "{bad:?}");
    }
}

#[test]
fn validate_symbol_accepts_tickers() {
    assert_eq!(validate_symbol("aapl").unwrap(), "AAPL");
    assert_eq!(validate_symbol("^gspc").unwrap(), "^GSPC");
    assert_eq!(validate_symbol("CL=F").unwrap(), "CL=F");
    assert_eq!(validate_symbol("BF-B").unwrap(), "BF-B");
}

// ═══════════════════════════════════════════════════════════════════
// Candles
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn candles_over_range() {
    let from = 1_700_000_000;
    let candles = app()
        .get_candles("msft", Resolution::Day, from, from + 9 * DAY)
        .await
        .unwrap();
    assert_eq!(candles.len(), 10);
    assert_eq!(candles[0].date, from);
}

#[tokio::test]
async fn candles_reject_reversed_range() {
    let err = app()
        .get_candles("MSFT", Resolution::Day, 10, 5)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
}

#[tokio::test]
async fn default_candles_cover_last_year() {
    let before = Utc::now().timestamp();
    let candles = app().get_default_candles("AAPL").await.unwrap();
    assert_eq!(candles.len(), 366);

    let first = candles.first().unwrap().date;
    let last = candles.last().unwrap().date;
    assert_eq!(last - first, 365 * DAY);
    assert!(first >= before - 365 * DAY - 5);
}

// ═══════════════════════════════════════════════════════════════════
// News
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn news_filters_by_query() {
    let app = app();
    assert_eq!(app.get_news("general", None).await.unwrap().len(), 5);

    let filtered = app.get_news("technology", Some("MSFT")).await.unwrap();
    assert!(filtered.iter().any(|a| a.id == "2"));
    assert!(filtered.iter().all(|a| a.matches("MSFT")));
}

// ═══════════════════════════════════════════════════════════════════
// Portfolios
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn lists_configured_users_portfolios() {
    let summaries = app().list_portfolios().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().all(|s| s.currency == "USD"));
    assert!(summaries.iter().all(|s| s.total_value > 0.0));
}

#[tokio::test]
async fn summaries_agree_with_details() {
    let app = app();
    let summaries = app.list_portfolios().await.unwrap();
    for summary in summaries {
        let detail = app.get_portfolio_detail(summary.id).await.unwrap().unwrap();
        assert_eq!(detail.portfolio.name, summary.name);
        assert_eq!(detail.holdings.len(), detail.holding_valuations.len());
    }
}

#[tokio::test]
async fn unknown_portfolio_detail_is_none() {
    assert!(app().get_portfolio_detail(404).await.unwrap().is_none());
}

#[test]
fn value_holdings_through_facade() {
    let priced = vec![
        (Holding::new(1, 1, 1, 10.0, 100.0).unwrap(), 120.0),
        (Holding::new(2, 1, 2, 5.0, 200.0).unwrap(), 180.0),
    ];
    let valuation = app().value_holdings(&priced);
    assert_eq!(valuation.total_value, 2_100.0);
    assert_eq!(valuation.total_profit_loss, 100.0);
    assert!((valuation.total_profit_loss_percentage - 5.0).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn dashboard_loads_every_section() {
    let snapshot = app().load_dashboard(&CancellationToken::new()).await;

    let overview = snapshot.market_overview.loaded().unwrap();
    let symbols: Vec<&str> = overview.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["^GSPC", "^IXIC", "^DJI"]);

    assert_eq!(snapshot.trending.loaded().unwrap().len(), 5);
    assert_eq!(snapshot.latest_news.loaded().unwrap().len(), 3);

    let portfolio = snapshot.portfolio.loaded().unwrap().as_ref().unwrap();
    assert_eq!(portfolio.name, "Tech Growth");
}

#[tokio::test]
async fn cancelled_dashboard_loads_nothing() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let snapshot = app().load_dashboard(&cancel).await;
    assert!(!snapshot.market_overview.is_loaded());
    assert!(!snapshot.portfolio.is_loaded());
}

// ═══════════════════════════════════════════════════════════════════
// Logging
// ═══════════════════════════════════════════════════════════════════

#[test]
fn init_logging_is_idempotent() {
    let config = LoggingConfig::from_settings(&settings());
    init_logging(&config).unwrap();
    assert!(!init_logging(&config).unwrap());
}

#[test]
fn init_logging_rejects_bad_filter() {
    let config = LoggingConfig {
        log_level: "finport_core=shouting".into(),
        plain: true,
    };
    assert!(matches!(init_logging(&config), Err(CoreError::Config(_))));
}
