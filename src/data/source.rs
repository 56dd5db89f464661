use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::analysis::AnalysisError;
use crate::domain::AnalysisRequest;
use crate::models::PriceSeries;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceSource {
    // Either return the daily series for the request OR an anyhow::Error
    async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each source in turn. The first success wins.
pub async fn fetch_with_fallback(
    sources: &[Box<dyn PriceSource>],
    request: &AnalysisRequest,
) -> Result<(PriceSeries, &'static str), AnalysisError> {
    let mut failures = Vec::with_capacity(sources.len());

    for source in sources {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_details {
            log::info!("Fetching {} from {}", request, source.signature());
        }

        match source.fetch_series(request).await {
            Ok(series) => return Ok((series, source.signature())),
            Err(e) => {
                log::warn!("{} failed for {}: {:#}", source.signature(), request.symbol, e);
                failures.push(format!("{}: {:#}", source.signature(), e));
            }
        }
    }

    if failures.is_empty() {
        failures.push("no price sources configured".to_string());
    }
    Err(AnalysisError::DataUnavailable(failures.join("; ")))
}

/// Which sources an analysis run should use. Plain data, so it can cross into a worker thread
/// and the sources get built there.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SourceSelection {
    /// Yahoo Finance. The browser build falls back to the embedded demo series.
    #[default]
    Yahoo,
    /// Local CSV export first, then Yahoo
    Csv(PathBuf),
    /// Embedded demo series only
    Demo,
}

impl SourceSelection {
    pub fn build(&self) -> Vec<Box<dyn PriceSource>> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            SourceSelection::Yahoo => vec![Box::new(super::YahooSource::new())],
            #[cfg(not(target_arch = "wasm32"))]
            SourceSelection::Csv(path) => vec![
                Box::new(super::CsvSource::new(path.clone())),
                Box::new(super::YahooSource::new()),
            ],
            // Cross-origin requests to the chart endpoint are usually blocked in the browser
            #[cfg(target_arch = "wasm32")]
            SourceSelection::Yahoo | SourceSelection::Csv(_) => vec![
                Box::new(super::YahooSource::new()),
                Box::new(super::DemoSource),
            ],
            SourceSelection::Demo => vec![Box::new(super::DemoSource)],
        }
    }

    pub fn from_cli(csv: Option<PathBuf>, demo: bool) -> Self {
        match (csv, demo) {
            (_, true) => SourceSelection::Demo,
            (Some(path), false) => SourceSelection::Csv(path),
            (None, false) => SourceSelection::Yahoo,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::{BandParams, PriceBar};
    use anyhow::bail;
    use chrono::NaiveDate;

    struct Failing(&'static str);
    struct Fixed(&'static str, f64);

    #[async_trait]
    impl PriceSource for Failing {
        async fn fetch_series(&self, _request: &AnalysisRequest) -> Result<PriceSeries> {
            bail!("{} is down", self.0)
        }
        fn signature(&self) -> &'static str {
            self.0
        }
    }

    #[async_trait]
    impl PriceSource for Fixed {
        async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries> {
            Ok(PriceSeries::from_bars(
                &request.symbol,
                vec![PriceBar::new(0, self.1, self.1, self.1, self.1, 0.0)],
            ))
        }
        fn signature(&self) -> &'static str {
            self.0
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            "AAPL",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            BandParams::default(),
        )
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let sources: Vec<Box<dyn PriceSource>> = vec![
            Box::new(Failing("first")),
            Box::new(Fixed("second", 1.0)),
            Box::new(Fixed("third", 2.0)),
        ];
        let (series, signature) = fetch_with_fallback(&sources, &request()).await.unwrap();
        assert_eq!(signature, "second");
        assert_eq!(series.close_prices, vec![1.0]);
        assert_eq!(series.symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_all_failures_are_reported() {
        let sources: Vec<Box<dyn PriceSource>> =
            vec![Box::new(Failing("alpha")), Box::new(Failing("beta"))];
        match fetch_with_fallback(&sources, &request()).await {
            Err(AnalysisError::DataUnavailable(msg)) => {
                assert!(msg.contains("alpha is down"));
                assert!(msg.contains("beta is down"));
            }
            other => panic!("expected DataUnavailable, got {:?}", other),
        }

        let none: Vec<Box<dyn PriceSource>> = Vec::new();
        assert!(matches!(
            fetch_with_fallback(&none, &request()).await,
            Err(AnalysisError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_selection_order() {
        assert_eq!(SourceSelection::from_cli(None, false), SourceSelection::Yahoo);

        let csv = SourceSelection::from_cli(Some(PathBuf::from("aapl.csv")), false);
        let signatures: Vec<&str> = csv.build().iter().map(|s| s.signature()).collect();
        assert_eq!(signatures, vec!["CSV File", "Yahoo Finance"]);

        // Demo wins over a CSV path
        let demo = SourceSelection::from_cli(Some(PathBuf::from("aapl.csv")), true);
        assert_eq!(demo, SourceSelection::Demo);
        let signatures: Vec<&str> = demo.build().iter().map(|s| s.signature()).collect();
        assert_eq!(signatures, vec!["Offline Demo"]);
    }
}
