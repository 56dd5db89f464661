// Price data sources
pub mod csv_source;
pub mod demo;
pub mod source;
pub mod yahoo;

// Re-export commonly used types
#[cfg(not(target_arch = "wasm32"))]
pub use csv_source::CsvSource;
pub use demo::DemoSource;
pub use source::{PriceSource, SourceSelection, fetch_with_fallback};
pub use yahoo::YahooSource;
