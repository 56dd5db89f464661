//! Daily history from the Yahoo Finance chart endpoint.

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::YAHOO;
use crate::data::PriceSource;
use crate::domain::{AnalysisRequest, PriceBar};
use crate::models::PriceSeries;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

// Chart endpoint response
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteColumns>,
    adjclose: Option<Vec<AdjCloseColumn>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteColumns {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseColumn {
    adjclose: Vec<Option<f64>>,
}

pub struct YahooSource {
    base_url: String,
    auto_adjust: bool,
}

impl Default for YahooSource {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooSource {
    pub fn new() -> Self {
        Self {
            base_url: YAHOO.base_url.to_string(),
            auto_adjust: YAHOO.auto_adjust,
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::new()
        }
    }

    fn build_url(&self, request: &AnalysisRequest) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("bad chart endpoint '{}'", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("chart endpoint '{}' cannot take a path", self.base_url))?
            .push(&request.symbol);
        url.query_pairs_mut()
            .append_pair(
                "period1",
                &time_utils::date_to_epoch_sec(request.start_date).to_string(),
            )
            .append_pair(
                "period2",
                &time_utils::date_to_epoch_sec(request.end_date).to_string(),
            )
            .append_pair("interval", YAHOO.interval)
            .append_pair("events", "history");
        Ok(url)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn client() -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(YAHOO.user_agent)
            .timeout(std::time::Duration::from_millis(YAHOO.timeout_ms))
            .build()
            .context("failed to build HTTP client")
    }

    #[cfg(target_arch = "wasm32")]
    fn client() -> Result<reqwest::Client> {
        // The browser sets the agent and owns timeouts
        Ok(reqwest::Client::new())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceSource for YahooSource {
    async fn fetch_series(&self, request: &AnalysisRequest) -> Result<PriceSeries> {
        let url = self.build_url(request)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_details {
            log::info!("GET {}", url);
        }

        let response = Self::client()?
            .get(url)
            .send()
            .await
            .with_context(|| format!("request for {} failed", request.symbol))?;

        // Unknown symbols come back as 404 with the error object in the body
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("failed to read response body for {}", request.symbol))?;

        parse_chart_response(&request.symbol, &text, self.auto_adjust)
            .with_context(|| format!("{} (HTTP {})", request.symbol, status))
    }

    fn signature(&self) -> &'static str {
        "Yahoo Finance"
    }
}

/// Turn a chart JSON body into a series. Rows with any missing OHLCV value are skipped.
fn parse_chart_response(symbol: &str, json: &str, auto_adjust: bool) -> Result<PriceSeries> {
    let response: ChartResponse =
        serde_json::from_str(json).context("unexpected chart response format")?;

    if let Some(error) = response.chart.error {
        bail!("chart API error [{}]: {}", error.code, error.description);
    }

    let data = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| anyhow!("no data returned"))?;
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_close = data
        .indicators
        .adjclose
        .and_then(|a| a.into_iter().next())
        .map(|a| a.adjclose);

    let value = |col: &[Option<f64>], i: usize| col.get(i).copied().flatten();

    let mut bars = Vec::with_capacity(data.timestamp.len());
    for (i, &ts_sec) in data.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
            value(&quote.open, i),
            value(&quote.high, i),
            value(&quote.low, i),
            value(&quote.close, i),
            value(&quote.volume, i),
        ) else {
            continue;
        };

        let mut bar = PriceBar::new(ts_sec * 1000, open, high, low, close, volume);
        // Once adjusting, every kept row must be on the adjusted scale
        if auto_adjust {
            if let Some(col) = adj_close.as_deref() {
                let Some(adj) = value(col, i) else {
                    continue;
                };
                if !apply_adjustment(&mut bar, adj) {
                    continue;
                }
            }
        }
        bars.push(bar);
    }

    if bars.is_empty() {
        bail!("no valid rows returned");
    }

    Ok(PriceSeries::from_bars(symbol, bars))
}

/// Rescale a bar so its close equals the split/dividend adjusted close.
/// Returns false when no ratio can be formed and the bar must be dropped.
fn apply_adjustment(bar: &mut PriceBar, adj_close: f64) -> bool {
    if bar.close_price == 0.0 || !adj_close.is_finite() {
        return false;
    }
    let ratio = adj_close / bar.close_price;
    bar.open_price *= ratio;
    bar.high_price *= ratio;
    bar.low_price *= ratio;
    bar.close_price = adj_close;
    true
}
