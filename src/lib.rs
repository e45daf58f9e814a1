// Public API exports
pub mod config;
pub mod constants;
pub mod extract;
pub mod holding;

// Re-export key types for easy access
pub use config::extractor_config::{BalanceMatchMode, ExtractorConfig};
pub use extract::holdings::HoldingsExtractor;
pub use extract::summary::{extract_summary, PortfolioSummary};
pub use holding::HoldingRecord;
