pub mod catalog;
pub mod traits;

// Simulated backend implementations
pub mod in_memory_store;
pub mod news_feed;
pub mod simulated;
