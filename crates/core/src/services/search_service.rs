use crate::models::stock::Stock;

/// Case-insensitive symbol/name filter over a static stock list.
///
/// An empty (or whitespace-only) query returns the first `default_limit`
/// entries instead of the whole list, which keeps dropdowns short.
pub struct SearchService {
    default_limit: usize,
}

impl SearchService {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Entries whose symbol or name contains `query`, in list order.
    /// Surrounding whitespace is part of a non-blank query.
    pub fn filter<'a>(&self, stocks: &'a [Stock], query: &str) -> Vec<&'a Stock> {
        if query.trim().is_empty() {
            return stocks.iter().take(self.default_limit).collect();
        }

        let q = query.to_lowercase();

        stocks
            .iter()
            .filter(|s| s.symbol.to_lowercase().contains(&q) || s.name.to_lowercase().contains(&q))
            .collect()
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new(10)
    }
}
