use statrs::statistics::Statistics;

use crate::analysis::AnalysisError;
use crate::domain::BandParams;
use crate::models::{BandedSeries, PriceSeries};

/// Rolling SMA and sample standard deviation (ddof = 1) over `window` closes,
/// with bands at `SMA ± std_multiplier * STD`.
///
/// Rows without a full window are dropped, as are rows whose window holds a
/// non-finite close. A window of 1 gives STD = 0.
pub fn compute_bands(
    series: &PriceSeries,
    params: BandParams,
) -> Result<BandedSeries, AnalysisError> {
    params.validate()?;
    let BandParams {
        window,
        std_multiplier,
    } = params;

    let n = series.len();
    if !series.close_aligned() {
        return Err(AnalysisError::MissingField("close"));
    }
    if n < window {
        return Err(AnalysisError::InsufficientData {
            required: window,
            available: n,
        });
    }

    let closes = &series.close_prices;
    let mut kept = Vec::with_capacity(n - window + 1);
    let mut sma = Vec::with_capacity(n - window + 1);
    let mut std = Vec::with_capacity(n - window + 1);

    for end in window..=n {
        let span = &closes[end - window..end];
        if span.iter().any(|c| !c.is_finite()) {
            continue;
        }

        let mean = span.iter().mean();
        let sd = if window == 1 { 0.0 } else { span.iter().std_dev() };

        kept.push(end - 1);
        sma.push(mean);
        std.push(sd);
    }

    if kept.is_empty() {
        let available = closes.iter().filter(|c| c.is_finite()).count();
        return Err(AnalysisError::InsufficientData {
            required: window,
            available,
        });
    }

    let upper_band = sma
        .iter()
        .zip(&std)
        .map(|(m, s)| m + std_multiplier * s)
        .collect();
    let lower_band = sma
        .iter()
        .zip(&std)
        .map(|(m, s)| m - std_multiplier * s)
        .collect();

    Ok(BandedSeries {
        series: series.select(&kept),
        sma,
        std,
        upper_band,
        lower_band,
        window,
        std_multiplier,
    })
}
