//! Market data sources.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

/// Tracked instruments: friendly name to Yahoo Finance ticker.
pub const ASSET_TICKERS: &[(&str, &str)] = &[
    ("EUR/USD", "EURUSD=X"),
    ("GBP/USD", "GBPUSD=X"),
    ("USD/JPY", "USDJPY=X"),
    ("GBP/JPY", "GBPJPY=X"),
    ("AUD/USD", "AUDUSD=X"),
];

/// Resolve a friendly asset name to its provider ticker.
pub fn resolve_ticker(asset: &str) -> Option<&'static str> {
    ASSET_TICKERS
        .iter()
        .find(|(name, _)| *name == asset)
        .map(|(_, ticker)| *ticker)
}

/// All tracked asset names, in table order.
pub fn asset_names() -> Vec<&'static str> {
    ASSET_TICKERS.iter().map(|(name, _)| *name).collect()
}
