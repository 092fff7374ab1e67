pub mod candle_service;
pub mod dashboard_service;
pub mod search_service;
pub mod valuation_service;
