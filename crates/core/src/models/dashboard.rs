use serde::{Deserialize, Serialize};

use super::news::NewsArticle;
use super::portfolio::PortfolioSummary;
use super::stock::{StockDetails, StockSearchResult};

/// Outcome of one independently loaded dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section<T> {
    Loaded(T),
    /// The fetch failed; the message is safe to show next to a retry button.
    Failed(String),
    /// The load was cancelled before this section finished.
    Cancelled,
}

impl<T> Section<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Section::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_loaded(self) -> Option<T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything the dashboard page shows, one slot per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub market_overview: Section<Vec<StockDetails>>,
    pub trending: Section<Vec<StockSearchResult>>,
    pub latest_news: Section<Vec<NewsArticle>>,
    /// `Loaded(None)` when the user has no portfolios yet
    pub portfolio: Section<Option<PortfolioSummary>>,
}
