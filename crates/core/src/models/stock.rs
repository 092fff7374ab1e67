use serde::{Deserialize, Serialize};

/// Kind of listed security. Decides how a quote is labelled in search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    /// Ordinary shares (AAPL, MSFT, etc.)
    CommonStock,
    /// Market index (^GSPC, ^DJI, etc.); quotable but not holdable
    Index,
}

impl std::fmt::Display for SecurityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityType::CommonStock => write!(f, "Common Stock"),
            SecurityType::Index => write!(f, "Index"),
        }
    }
}

/// Immutable reference data for a listed security.
///
/// **Equality and hashing** are based solely on `symbol`, which is stored
/// uppercased, so lookups are case-insensitive by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// Numeric id referenced by holdings and transactions
    pub id: u64,

    /// Ticker symbol, uppercased (e.g., "AAPL", "BRK.A", "^GSPC")
    pub symbol: String,

    /// Human-readable name (e.g., "Apple Inc.")
    pub name: String,

    #[serde(default)]
    pub sector: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,

    /// Listing venue (e.g., "NASDAQ", "NYSE")
    #[serde(default)]
    pub exchange: Option<String>,

    pub security_type: SecurityType,
}

impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Stock {}

impl std::hash::Hash for Stock {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl Stock {
    pub fn new(id: u64, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            sector: None,
            industry: None,
            exchange: None,
            security_type: SecurityType::CommonStock,
        }
    }

    /// Convenience constructor for a market index.
    pub fn index(id: u64, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            security_type: SecurityType::Index,
            ..Self::new(id, symbol, name)
        }
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    pub fn with_classification(
        mut self,
        sector: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        self.sector = Some(sector.into());
        self.industry = Some(industry.into());
        self
    }

    /// Project into the shape returned by symbol search.
    pub fn to_search_result(&self) -> StockSearchResult {
        StockSearchResult {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            exchange: self.exchange.clone(),
            security_type: self.security_type,
        }
    }
}

/// One hit from `search_symbols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSearchResult {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(rename = "type")]
    pub security_type: SecurityType,
}

/// A quote: reference data plus randomly simulated live-market fields.
///
/// Within a single quote the fields are coherent:
/// `current_price = previous_close + change_today`, the day range brackets
/// both `open` and `current_price`, and `change_today_percent` is already
/// scaled (1.5 means 1.5 %).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetails {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub change_today: f64,
    pub change_today_percent: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: u64,
    pub market_cap: f64,
    /// Not meaningful for indices
    pub pe_ratio: Option<f64>,
    pub eps: Option<f64>,
    /// Already scaled like every other percentage: 1.2 means 1.2 %
    pub dividend_yield: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub exchange: Option<String>,
    pub description: String,
    pub website: String,
    pub logo_url: String,
}
