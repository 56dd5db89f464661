//! Band computation and request defaults

/// Bollinger Band parameters used when the user has not changed them
pub struct BandDefaults {
    // Trailing window (in rows) for the SMA and standard deviation
    pub window: usize,
    // Band half-width in standard deviations
    pub std_multiplier: f64,
}

/// Limits for the band parameter widgets
pub struct BandLimits {
    pub min_window: usize,
    pub max_window: usize,
    pub max_std_multiplier: f64,
}

/// Defaults for the request inputs shown at startup
pub struct RequestDefaults {
    pub symbol: &'static str,
    // End date defaults to today, so only the start is fixed
    pub start_date: &'static str,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub bands: BandDefaults,
    pub limits: BandLimits,
    pub request: RequestDefaults,
    /// Number of most-recent rows in the data preview table
    pub preview_rows: usize,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    bands: BandDefaults {
        window: 20,
        std_multiplier: 2.0,
    },

    limits: BandLimits {
        min_window: 1,
        max_window: 200,
        max_std_multiplier: 5.0,
    },

    request: RequestDefaults {
        symbol: "AAPL",
        start_date: "2023-01-01",
    },

    preview_rows: 5,
};
