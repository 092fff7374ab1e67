pub mod candle;
pub mod dashboard;
pub mod holding;
pub mod news;
pub mod portfolio;
pub mod settings;
pub mod stock;
pub mod transaction;
pub mod valuation;
