use crate::config::PLOT_CONFIG;
use crate::models::{BandSignal, SignaledSeries};
use crate::utils::{maths_utils, time_utils};

/// A buy or sell marker on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalMarker {
    pub x: f64,
    pub price: f64,
    pub signal: BandSignal,
}

/// Plot-ready geometry for one analysed series.
/// x values are fractional days since the Unix epoch, so the axis formatter can turn them back into dates.
#[derive(Debug, Clone, Default)]
pub struct BandChart {
    pub symbol: String,
    pub close: Vec<[f64; 2]>,
    pub upper: Vec<[f64; 2]>,
    pub lower: Vec<[f64; 2]>,
    /// One quad per consecutive row pair, between the bands. Kept convex so egui_plot fills it correctly.
    pub fill_segments: Vec<[[f64; 2]; 4]>,
    pub buy_markers: Vec<SignalMarker>,
    pub sell_markers: Vec<SignalMarker>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BandChart {
    pub fn from_series(series: &SignaledSeries) -> Self {
        let banded = &series.banded;
        let xs: Vec<f64> = banded
            .series
            .timestamps_ms
            .iter()
            .map(|&ts| time_utils::epoch_ms_to_days(ts))
            .collect();

        let zip = |ys: &[f64]| -> Vec<[f64; 2]> {
            xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
        };
        let close = zip(&banded.series.close_prices);
        let upper = zip(&banded.upper_band);
        let lower = zip(&banded.lower_band);

        let fill_segments = (1..xs.len())
            .map(|i| {
                [
                    lower[i - 1],
                    lower[i],
                    upper[i],
                    upper[i - 1],
                ]
            })
            .collect();

        let markers = |signal: BandSignal| -> Vec<SignalMarker> {
            series
                .signal_indices(signal)
                .into_iter()
                .map(|i| SignalMarker {
                    x: xs[i],
                    price: banded.series.close_prices[i],
                    signal,
                })
                .collect()
        };
        let buy_markers = markers(BandSignal::Buy);
        let sell_markers = markers(BandSignal::Sell);

        let (x_min, x_max) = match (xs.first(), xs.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (0.0, 1.0),
        };

        // Bands enclose the close unless the close is outside them, so scan all three.
        let all_y: Vec<f64> = banded
            .series
            .close_prices
            .iter()
            .chain(&banded.upper_band)
            .chain(&banded.lower_band)
            .copied()
            .collect();
        let (y_min, y_max) = match maths_utils::get_min_max(&all_y) {
            Some((lo, hi)) => maths_utils::pad_range(lo, hi, PLOT_CONFIG.y_padding_pct),
            None => (0.0, 1.0),
        };

        Self {
            symbol: series.symbol().to_string(),
            close,
            upper,
            lower,
            fill_segments,
            buy_markers,
            sell_markers,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}
