use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    /// Publisher, e.g. "Reuters"
    pub source: String,
    pub headline: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Uppercased tickers the article refers to
    #[serde(default)]
    pub symbols_mentioned: Vec<String>,
}

impl NewsArticle {
    /// Headline contains `query` (case-insensitive) or the article mentions
    /// the uppercased `query` as a symbol.
    pub fn matches(&self, query: &str) -> bool {
        let upper = query.to_uppercase();
        self.headline.to_lowercase().contains(&query.to_lowercase())
            || self.symbols_mentioned.iter().any(|s| *s == upper)
    }
}
