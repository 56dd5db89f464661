use crate::models::PriceSeries;

/// A price series with Bollinger Band columns aligned row for row.
/// Only rows with a full trailing window are kept, so every band value is defined.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedSeries {
    pub series: PriceSeries,
    pub sma: Vec<f64>,
    pub std: Vec<f64>,
    pub upper_band: Vec<f64>,
    pub lower_band: Vec<f64>,
    pub window: usize,
    pub std_multiplier: f64,
}

impl BandedSeries {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn symbol(&self) -> &str {
        &self.series.symbol
    }
}
