use chrono::{DateTime, Duration, Utc};

use crate::models::news::NewsArticle;

fn article(
    id: &str,
    source: &str,
    headline: impl Into<String>,
    summary: impl Into<String>,
    published_at: DateTime<Utc>,
    symbols: Vec<String>,
    image_tag: &str,
) -> NewsArticle {
    NewsArticle {
        id: id.to_string(),
        source: source.to_string(),
        headline: headline.into(),
        summary: Some(summary.into()),
        url: "#".to_string(),
        image_url: Some(format!("https://via.placeholder.com/150?text={image_tag}")),
        published_at,
        symbols_mentioned: symbols,
    }
}

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The fixed feed, newest first. The fourth article is templated on
/// `category` and `query`, so it always matches a non-empty query.
pub fn news_feed(category: &str, query: Option<&str>, now: DateTime<Utc>) -> Vec<NewsArticle> {
    let update_headline = format!("{} Update: {category} sector sees movement.", query.unwrap_or("Market"));
    let update_summary = match query {
        Some(q) => format!(
            "Activity in the {category} sector has been noteworthy. Specifically, {} is on the move.",
            q.to_uppercase()
        ),
        None => format!("Activity in the {category} sector has been noteworthy."),
    };
    let update_symbols = query.map(|q| vec![q.to_uppercase()]).unwrap_or_default();

    vec![
        article(
            "1",
            "MarketWatch",
            "Stocks Rally on Positive Economic Data",
            "Major indices saw significant gains today as new economic reports indicate strong growth and low unemployment.",
            now,
            symbols(&["^DJI", "^GSPC"]),
            "MarketRally",
        ),
        article(
            "2",
            "Reuters",
            "Tech Giants Post Strong Earnings for Q3",
            "Apple, Microsoft, and Google parent Alphabet all reported earnings that beat analyst expectations, signaling a robust tech sector.",
            now - Duration::hours(1),
            symbols(&["AAPL", "MSFT", "GOOGL"]),
            "TechEarnings",
        ),
        article(
            "3",
            "Bloomberg",
            "Oil Prices Fluctuate Amid Geopolitical Tensions and OPEC+ Decisions",
            "Crude oil prices experienced volatility this week due to ongoing international events and upcoming OPEC+ production meetings.",
            now - Duration::hours(2),
            symbols(&["CL=F", "BZ=F"]),
            "OilPrices",
        ),
        article(
            "4",
            "Finnhub Press",
            update_headline,
            update_summary,
            now - Duration::hours(3),
            update_symbols,
            "MarketUpdate",
        ),
        article(
            "5",
            "Yahoo Finance",
            "Federal Reserve Signals Potential Interest Rate Hikes in Coming Months",
            "Fed Chair hinted at possible rate increases to combat inflation, causing ripples in bond and equity markets.",
            now - Duration::hours(5),
            symbols(&["^TNX"]),
            "FedRateHike",
        ),
    ]
}
