//! Yahoo Finance chart API configuration.

/// Configuration for the chart endpoint client
pub struct YahooConfig {
    /// Chart endpoint; the symbol is appended as a path segment
    pub base_url: &'static str,
    /// Bar interval requested from the endpoint
    pub interval: &'static str,
    /// Request timeout (native builds only; the browser owns timeouts on wasm32)
    pub timeout_ms: u64,
    /// The endpoint rejects requests without a browser-like agent
    pub user_agent: &'static str,
    /// Replace close with the split/dividend adjusted close and scale open/high/low to match
    pub auto_adjust: bool,
}

pub const YAHOO: YahooConfig = YahooConfig {
    base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    interval: "1d",
    timeout_ms: 10_000,
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    auto_adjust: true,
};
