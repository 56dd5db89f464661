use crate::analysis::{AnalysisError, compute_bands, generate_signals};
use crate::data::{PriceSource, fetch_with_fallback};
use crate::domain::{AnalysisRequest, BandParams};
use crate::models::{PriceSeries, SignaledSeries};

/// The outcome of one Analyze action.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub request: AnalysisRequest,
    pub series: SignaledSeries,
    /// Which price source served the data
    pub source_signature: &'static str,
    /// Rows received before warm-up and missing-value drops
    pub raw_rows: usize,
}

/// Bands then signals over an already fetched series.
pub fn analyze_series(
    series: &PriceSeries,
    params: BandParams,
) -> Result<SignaledSeries, AnalysisError> {
    let banded = compute_bands(series, params)?;
    generate_signals(&banded)
}

/// Validate, fetch, then analyse. Nothing is cached between calls.
pub async fn run_analysis(
    sources: &[Box<dyn PriceSource>],
    request: AnalysisRequest,
) -> Result<AnalysisReport, AnalysisError> {
    request.validate()?;

    let (raw, source_signature) = fetch_with_fallback(sources, &request).await?;
    let series = analyze_series(&raw, request.params)?;

    Ok(AnalysisReport {
        raw_rows: raw.len(),
        request,
        series,
        source_signature,
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::PriceBar;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    const DAY: i64 = 86_400_000;

    struct Canned(Vec<f64>);

    #[async_trait]
    impl PriceSource for Canned {
        async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries> {
            let bars = self
                .0
                .iter()
                .enumerate()
                .map(|(i, &c)| PriceBar::new(i as i64 * DAY, c, c, c, c, 1.0))
                .collect();
            Ok(PriceSeries::from_bars(&request.symbol, bars))
        }
        fn signature(&self) -> &'static str {
            "Canned"
        }
    }

    fn request(window: usize, k: f64) -> AnalysisRequest {
        AnalysisRequest::new(
            "TEST",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            BandParams::new(window, k),
        )
    }

    #[tokio::test]
    async fn test_known_scenario_end_to_end() {
        let sources: Vec<Box<dyn PriceSource>> =
            vec![Box::new(Canned(vec![10.0, 10.0, 10.0, 10.0, 10.0, 5.0]))];
        let report = run_analysis(&sources, request(5, 2.0)).await.unwrap();

        assert_eq!(report.source_signature, "Canned");
        assert_eq!(report.raw_rows, 6);
        assert_eq!(report.series.len(), 2);

        let last = report.series.row(1);
        assert!((last.sma - 9.0).abs() < 1e-9);
        assert!((last.std - 2.2360680).abs() < 1e-7);
        assert!((last.upper_band - 13.4721360).abs() < 1e-7);
        assert!((last.lower_band - 4.5278640).abs() < 1e-7);
        assert!(!last.buy_signal);
        assert!(!last.sell_signal);
    }

    #[tokio::test]
    async fn test_signals_on_breakout() {
        let mut closes = vec![100.0, 101.0, 99.0, 100.0, 101.0, 99.0, 100.0];
        closes.push(120.0);
        closes.push(100.0);
        closes.push(70.0);
        let sources: Vec<Box<dyn PriceSource>> = vec![Box::new(Canned(closes))];

        let report = run_analysis(&sources, request(5, 1.0)).await.unwrap();
        let series = &report.series;
        assert!(series.sell_count() >= 1);
        assert!(series.buy_count() >= 1);
        assert!(series.row(series.len() - 1).buy_signal);
        for i in 0..series.len() {
            assert!(!(series.buy_signal[i] && series.sell_signal[i]));
        }
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let sources: Vec<Box<dyn PriceSource>> = vec![Box::new(Canned(vec![1.0, 2.0]))];

        assert!(matches!(
            run_analysis(&sources, request(0, 2.0)).await,
            Err(AnalysisError::InvalidParameter(_))
        ));
        assert!(matches!(
            run_analysis(&sources, request(20, 2.0)).await,
            Err(AnalysisError::InsufficientData { required: 20, available: 2 })
        ));

        let none: Vec<Box<dyn PriceSource>> = Vec::new();
        assert!(matches!(
            run_analysis(&none, request(2, 2.0)).await,
            Err(AnalysisError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_analyze_series_is_repeatable() {
        let series = PriceSeries::from_bars(
            "TEST",
            (0..30)
                .map(|i| {
                    let c = 50.0 + (i as f64 * 0.7).sin() * 5.0;
                    PriceBar::new(i * DAY, c, c, c, c, 1.0)
                })
                .collect(),
        );
        let a = analyze_series(&series, BandParams::default()).unwrap();
        let b = analyze_series(&series, BandParams::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 30 - 20 + 1);
    }
}
