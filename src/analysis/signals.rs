use itertools::izip;

use crate::analysis::AnalysisError;
use crate::models::{BandedSeries, SignaledSeries};

/// Flags closes outside the bands: below the lower band is a buy, above the upper band a sell.
/// Rows with any non-finite price or band value are dropped first.
pub fn generate_signals(banded: &BandedSeries) -> Result<SignaledSeries, AnalysisError> {
    let n = banded.series.timestamps_ms.len();
    let columns = [
        ("close", banded.series.close_prices.len()),
        ("sma", banded.sma.len()),
        ("std", banded.std.len()),
        ("upper_band", banded.upper_band.len()),
        ("lower_band", banded.lower_band.len()),
    ];
    if let Some((name, _)) = columns.iter().find(|(_, len)| *len != n) {
        return Err(AnalysisError::MissingField(*name));
    }

    let kept: Vec<usize> = izip!(
        &banded.series.close_prices,
        &banded.sma,
        &banded.std,
        &banded.upper_band,
        &banded.lower_band
    )
    .enumerate()
    .filter(|(_, (c, m, s, u, l))| [**c, **m, **s, **u, **l].iter().all(|v| v.is_finite()))
    .map(|(i, _)| i)
    .collect();

    // Rebuilt through `select` so untouched price columns come out row-aligned
    let pick = |col: &[f64]| kept.iter().map(|&i| col[i]).collect::<Vec<f64>>();
    let clean = BandedSeries {
        series: banded.series.select(&kept),
        sma: pick(&banded.sma),
        std: pick(&banded.std),
        upper_band: pick(&banded.upper_band),
        lower_band: pick(&banded.lower_band),
        window: banded.window,
        std_multiplier: banded.std_multiplier,
    };

    let buy_signal = izip!(&clean.series.close_prices, &clean.lower_band)
        .map(|(close, lower)| close < lower)
        .collect();
    let sell_signal = izip!(&clean.series.close_prices, &clean.upper_band)
        .map(|(close, upper)| close > upper)
        .collect();

    Ok(SignaledSeries {
        banded: clean,
        buy_signal,
        sell_signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BandSignal, PriceSeries};

    const DAY: i64 = 86_400_000;

    /// Hand-built banded data: a flat band at 9..11 around SMA 10.
    fn flat_band(closes: &[f64]) -> BandedSeries {
        let mut series = PriceSeries::new("TEST");
        for (i, &c) in closes.iter().enumerate() {
            series.push_bar(&crate::domain::PriceBar::new(i as i64 * DAY, c, c, c, c, 0.0));
        }
        let n = closes.len();
        BandedSeries {
            series,
            sma: vec![10.0; n],
            std: vec![0.5; n],
            upper_band: vec![11.0; n],
            lower_band: vec![9.0; n],
            window: 3,
            std_multiplier: 2.0,
        }
    }

    #[test]
    fn test_buy_and_sell_flags() {
        let banded = flat_band(&[8.5, 9.0, 10.0, 11.0, 11.5]);
        let signaled = generate_signals(&banded).unwrap();

        // Touching a band is not a signal
        assert_eq!(signaled.buy_signal, vec![true, false, false, false, false]);
        assert_eq!(signaled.sell_signal, vec![false, false, false, false, true]);
        assert_eq!(signaled.buy_count(), 1);
        assert_eq!(signaled.sell_count(), 1);
        assert_eq!(signaled.signal_indices(BandSignal::Buy), vec![0]);
        assert_eq!(signaled.signal_indices(BandSignal::Sell), vec![4]);

        for i in 0..signaled.len() {
            assert!(!(signaled.buy_signal[i] && signaled.sell_signal[i]));
        }
    }

    #[test]
    fn test_drops_rows_with_missing_values() {
        let mut banded = flat_band(&[8.0, f64::NAN, 12.0, 10.0]);
        banded.upper_band[3] = f64::INFINITY;

        let signaled = generate_signals(&banded).unwrap();
        assert_eq!(signaled.len(), 2);
        assert_eq!(signaled.banded.series.timestamps_ms, vec![0, 2 * DAY]);
        assert_eq!(signaled.buy_signal, vec![true, false]);
        assert_eq!(signaled.sell_signal, vec![false, true]);
    }

    #[test]
    fn test_idempotent() {
        let banded = flat_band(&[8.0, 10.0, 12.0]);
        let first = generate_signals(&banded).unwrap();
        let second = generate_signals(&banded).unwrap();
        assert_eq!(first, second);

        let again = generate_signals(&first.banded).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_missing_column() {
        let mut banded = flat_band(&[8.0, 10.0, 12.0]);
        banded.lower_band.clear();
        assert_eq!(
            generate_signals(&banded),
            Err(AnalysisError::MissingField("lower_band"))
        );

        let mut banded = flat_band(&[8.0, 10.0, 12.0]);
        banded.series.close_prices.pop();
        assert_eq!(
            generate_signals(&banded),
            Err(AnalysisError::MissingField("close"))
        );
    }

    #[test]
    fn test_unread_columns_do_not_fail() {
        let mut banded = flat_band(&[8.0, 10.0, 12.0]);
        banded.series.open_prices.pop();
        banded.series.volumes.clear();

        let signaled = generate_signals(&banded).unwrap();
        assert_eq!(signaled.len(), 3);
        assert_eq!(signaled.buy_signal, vec![true, false, false]);
        assert_eq!(signaled.sell_signal, vec![false, false, true]);
        // Every row is readable; the short columns are padded
        assert!(signaled.row(2).open.is_nan());
        assert!(signaled.row(0).volume.is_nan());
    }
}
