//! Offline daily series compiled into the binary. The browser build cannot reach
//! the chart endpoint cross-origin, so it falls back to this.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::PriceSource;
use crate::data::csv_source::parse_csv;
use crate::domain::AnalysisRequest;
use crate::models::PriceSeries;

const DEMO_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demo_data/demo_daily.csv"
));

/// Synthetic business-day prices from 2022-01-03 to 2026-10-16, served under whatever symbol is requested.
pub struct DemoSource;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceSource for DemoSource {
    async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries> {
        parse_csv(request, DEMO_CSV.as_bytes()).context("Failed to read embedded demo prices")
    }

    fn signature(&self) -> &'static str {
        "Offline Demo"
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use crate::domain::BandParams;
    use chrono::NaiveDate;

    fn request(start: &str, end: &str) -> AnalysisRequest {
        AnalysisRequest::new(
            "demo",
            NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            BandParams::default(),
        )
    }

    #[tokio::test]
    async fn test_default_range_is_covered() {
        let series = DemoSource
            .fetch_series(&request("2023-01-01", "2024-01-01"))
            .await
            .unwrap();

        assert_eq!(series.symbol, "DEMO");
        assert!(series.len() > 240);
        assert_eq!(series.first_date().as_deref(), Some("2023-01-02"));
        assert_eq!(series.last_date().as_deref(), Some("2023-12-29"));
        assert!(series.close_prices.iter().all(|c| c.is_finite() && *c > 0.0));
    }

    #[tokio::test]
    async fn test_out_of_range_fails() {
        assert!(
            DemoSource
                .fetch_series(&request("2030-01-01", "2030-06-01"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_demo_feeds_the_pipeline() {
        let sources: Vec<Box<dyn PriceSource>> = vec![Box::new(DemoSource)];
        let report = run_analysis(&sources, request("2023-01-01", "2023-07-01"))
            .await
            .unwrap();

        assert_eq!(report.source_signature, "Offline Demo");
        assert_eq!(report.series.len(), report.raw_rows - 19);
    }
}
