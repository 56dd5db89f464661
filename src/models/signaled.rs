use crate::models::BandedSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSignal {
    Buy,
    Sell,
}

impl std::fmt::Display for BandSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BandSignal::Buy => f.pad("BUY"),
            BandSignal::Sell => f.pad("SELL"),
        }
    }
}

/// One fully populated output row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRow {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub sma: f64,
    pub std: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub buy_signal: bool,
    pub sell_signal: bool,
}

/// Banded series plus the two boolean signal columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SignaledSeries {
    pub banded: BandedSeries,
    pub buy_signal: Vec<bool>,
    pub sell_signal: Vec<bool>,
}

impl SignaledSeries {
    pub fn len(&self) -> usize {
        self.banded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banded.is_empty()
    }

    pub fn symbol(&self) -> &str {
        self.banded.symbol()
    }

    pub fn buy_count(&self) -> usize {
        self.buy_signal.iter().filter(|&&b| b).count()
    }

    pub fn sell_count(&self) -> usize {
        self.sell_signal.iter().filter(|&&s| s).count()
    }

    pub fn row(&self, idx: usize) -> SignalRow {
        let b = &self.banded;
        SignalRow {
            timestamp_ms: b.series.timestamps_ms[idx],
            open: b.series.open_prices[idx],
            high: b.series.high_prices[idx],
            low: b.series.low_prices[idx],
            close: b.series.close_prices[idx],
            volume: b.series.volumes[idx],
            sma: b.sma[idx],
            std: b.std[idx],
            upper_band: b.upper_band[idx],
            lower_band: b.lower_band[idx],
            buy_signal: self.buy_signal[idx],
            sell_signal: self.sell_signal[idx],
        }
    }

    /// Last `n` rows, oldest first.
    pub fn tail(&self, n: usize) -> Vec<SignalRow> {
        let start = self.len().saturating_sub(n);
        (start..self.len()).map(|i| self.row(i)).collect()
    }

    /// Row indices carrying the given signal.
    pub fn signal_indices(&self, signal: BandSignal) -> Vec<usize> {
        let column = match signal {
            BandSignal::Buy => &self.buy_signal,
            BandSignal::Sell => &self.sell_signal,
        };
        column
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }
}
