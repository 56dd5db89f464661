//! Local CSV export in the Yahoo download layout:
//! `Date,Open,High,Low,Close,Adj Close,Volume`, with `null` for missing values.
//! Reading files is native only; the parser also backs the embedded demo series.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
#[cfg(not(target_arch = "wasm32"))]
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

#[cfg(not(target_arch = "wasm32"))]
use crate::data::PriceSource;
use crate::domain::{AnalysisRequest, PriceBar};
use crate::models::PriceSeries;
use crate::utils::time_utils::{self, TimeUtils};

/// A single record from the input CSV.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open", deserialize_with = "csv::invalid_option")]
    open: Option<f64>,
    #[serde(rename = "High", deserialize_with = "csv::invalid_option")]
    high: Option<f64>,
    #[serde(rename = "Low", deserialize_with = "csv::invalid_option")]
    low: Option<f64>,
    #[serde(rename = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(rename = "Volume", default, deserialize_with = "csv::invalid_option")]
    volume: Option<f64>,
}

#[cfg(not(target_arch = "wasm32"))]
pub struct CsvSource {
    pub path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl CsvSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl PriceSource for CsvSource {
    async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        parse_csv(request, bytes.as_slice())
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    fn signature(&self) -> &'static str {
        "CSV File"
    }
}

/// Keep rows with `start <= date < end`. Missing prices come through as NaN so the
/// band calculator can drop the windows they touch.
pub(crate) fn parse_csv<R: std::io::Read>(request: &AnalysisRequest, input: R) -> Result<PriceSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut bars = Vec::new();
    for (line, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = result.with_context(|| format!("bad record at row {}", line + 1))?;
        let date = parse_record_date(&record.date)
            .with_context(|| format!("bad date at row {}", line + 1))?;
        if date < request.start_date || date >= request.end_date {
            continue;
        }

        let nan_if_missing = |v: Option<f64>| v.unwrap_or(f64::NAN);
        bars.push(PriceBar::new(
            time_utils::date_to_epoch_ms(date),
            nan_if_missing(record.open),
            nan_if_missing(record.high),
            nan_if_missing(record.low),
            nan_if_missing(record.close),
            record.volume.unwrap_or(0.0),
        ));
    }

    if bars.is_empty() {
        bail!(
            "no rows between {} and {}",
            request.start_date,
            request.end_date
        );
    }

    Ok(PriceSeries::from_bars(&request.symbol, bars))
}

// Exports carry either a bare date or a full timestamp with offset
fn parse_record_date(text: &str) -> Result<NaiveDate> {
    let day = text.get(..10).unwrap_or(text);
    Ok(NaiveDate::parse_from_str(day, TimeUtils::STANDARD_TIME_FORMAT)?)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::BandParams;

    const EXPORT: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2023-01-03,130.28,130.90,124.17,125.07,123.90,112117500
2023-01-04,126.89,128.66,125.08,126.36,125.18,89113600
2023-01-05,127.13,127.77,124.76,null,null,null
2023-01-06 00:00:00-05:00,126.01,130.29,124.89,129.62,128.41,87754700
2023-01-09,130.47,133.41,129.89,130.15,128.94,70790800
";

    fn request(start: (i32, u32, u32), end: (i32, u32, u32)) -> AnalysisRequest {
        AnalysisRequest::new(
            "aapl",
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            BandParams::default(),
        )
    }

    #[test]
    fn test_parse_export() {
        let series = parse_csv(&request((2023, 1, 1), (2023, 2, 1)), EXPORT.as_bytes()).unwrap();

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.len(), 5);
        assert_eq!(series.close_prices[0], 125.07);
        assert!(series.close_prices[2].is_nan());
        assert_eq!(series.volumes[2], 0.0);
        assert_eq!(series.last_date().as_deref(), Some("2023-01-09"));
        assert_eq!(time_utils::epoch_ms_to_utc(series.timestamps_ms[3]), "2023-01-06");
    }

    #[test]
    fn test_date_range_is_half_open() {
        let series = parse_csv(&request((2023, 1, 4), (2023, 1, 9)), EXPORT.as_bytes()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date().as_deref(), Some("2023-01-04"));
        assert_eq!(series.last_date().as_deref(), Some("2023-01-06"));
    }

    #[test]
    fn test_empty_range_and_bad_rows() {
        assert!(parse_csv(&request((2024, 1, 1), (2024, 2, 1)), EXPORT.as_bytes()).is_err());

        let bad_date = "Date,Open,High,Low,Close,Adj Close,Volume\n03/01/2023,1,1,1,1,1,1\n";
        assert!(parse_csv(&request((2023, 1, 1), (2023, 2, 1)), bad_date.as_bytes()).is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = CsvSource::new(PathBuf::from("/definitely/not/here.csv"));
        let err = source
            .fetch_series(&request((2023, 1, 1), (2023, 2, 1)))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read"));
    }
}
