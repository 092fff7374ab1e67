use crate::models::stock::Stock;

/// Symbols shown in the dashboard's market overview.
pub const MARKET_INDEX_SYMBOLS: [&str; 3] = ["^GSPC", "^IXIC", "^DJI"];

/// The searchable stock universe, in display order.
pub fn reference_stocks() -> Vec<Stock> {
    vec![
        Stock::new(1, "AAPL", "Apple Inc.")
            .with_exchange("NASDAQ")
            .with_classification("Technology", "Consumer Electronics"),
        Stock::new(2, "MSFT", "Microsoft Corp.")
            .with_exchange("NASDAQ")
            .with_classification("Technology", "Software"),
        Stock::new(3, "GOOGL", "Alphabet Inc. (Class A)")
            .with_exchange("NASDAQ")
            .with_classification("Communication Services", "Internet Content & Information"),
        Stock::new(4, "AMZN", "Amazon.com Inc.")
            .with_exchange("NASDAQ")
            .with_classification("Consumer Cyclical", "Internet Retail"),
        Stock::new(5, "TSLA", "Tesla Inc.")
            .with_exchange("NASDAQ")
            .with_classification("Consumer Cyclical", "Auto Manufacturers"),
        Stock::new(6, "NVDA", "NVIDIA Corporation")
            .with_exchange("NASDAQ")
            .with_classification("Technology", "Semiconductors"),
        Stock::new(7, "META", "Meta Platforms Inc.")
            .with_exchange("NASDAQ")
            .with_classification("Communication Services", "Internet Content & Information"),
        Stock::new(8, "BRK.A", "Berkshire Hathaway Inc.")
            .with_exchange("NYSE")
            .with_classification("Financial Services", "Insurance"),
        Stock::new(9, "JPM", "JPMorgan Chase & Co.")
            .with_exchange("NYSE")
            .with_classification("Financial Services", "Banks"),
        Stock::new(10, "V", "Visa Inc.")
            .with_exchange("NYSE")
            .with_classification("Financial Services", "Credit Services"),
    ]
}

/// Quotable indices. Not part of symbol search.
pub fn market_indices() -> Vec<Stock> {
    vec![
        Stock::index(101, "^GSPC", "S&P 500").with_exchange("SNP"),
        Stock::index(102, "^IXIC", "NASDAQ Composite").with_exchange("NASDAQ"),
        Stock::index(103, "^DJI", "Dow Jones Industrial Average").with_exchange("DJI"),
    ]
}
