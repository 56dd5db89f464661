use crate::domain::PriceBar;
use crate::utils::time_utils;

// ============================================================================
// PriceSeries: daily price history for one symbol, stored column-wise
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,

    /// Bar open time, ascending and unique
    pub timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    pub volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    /// Build a series from unordered bars. Sorts by time and keeps the last bar for a repeated timestamp.
    pub fn from_bars(symbol: &str, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp_ms);

        let mut series = Self::new(symbol);
        for bar in bars {
            if series.timestamps_ms.last() == Some(&bar.timestamp_ms) {
                series.pop_bar();
            }
            series.push_bar(&bar);
        }
        series
    }

    pub fn push_bar(&mut self, bar: &PriceBar) {
        self.timestamps_ms.push(bar.timestamp_ms);
        self.open_prices.push(bar.open_price);
        self.high_prices.push(bar.high_price);
        self.low_prices.push(bar.low_price);
        self.close_prices.push(bar.close_price);
        self.volumes.push(bar.volume);
    }

    fn pop_bar(&mut self) {
        self.timestamps_ms.pop();
        self.open_prices.pop();
        self.high_prices.pop();
        self.low_prices.pop();
        self.close_prices.pop();
        self.volumes.pop();
    }

    pub fn len(&self) -> usize {
        self.timestamps_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_ms.is_empty()
    }

    /// True when the close column has one value per timestamp.
    pub fn close_aligned(&self) -> bool {
        self.close_prices.len() == self.timestamps_ms.len()
    }

    /// New series holding only the rows at `indices`, in the given order.
    /// A short price or volume column reads as NaN past its end.
    pub fn select(&self, indices: &[usize]) -> Self {
        let pick = |col: &[f64]| {
            indices
                .iter()
                .map(|&i| col.get(i).copied().unwrap_or(f64::NAN))
                .collect::<Vec<f64>>()
        };
        Self {
            symbol: self.symbol.clone(),
            timestamps_ms: indices.iter().map(|&i| self.timestamps_ms[i]).collect(),
            open_prices: pick(&self.open_prices),
            high_prices: pick(&self.high_prices),
            low_prices: pick(&self.low_prices),
            close_prices: pick(&self.close_prices),
            volumes: pick(&self.volumes),
        }
    }

    pub fn first_date(&self) -> Option<String> {
        self.timestamps_ms.first().map(|&ts| time_utils::epoch_ms_to_utc(ts))
    }

    pub fn last_date(&self) -> Option<String> {
        self.timestamps_ms.last().map(|&ts| time_utils::epoch_ms_to_utc(ts))
    }
}
