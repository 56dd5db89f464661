use crate::models::{SignalRow, SignaledSeries};
use crate::utils::time_utils;

pub const TABLE_COLUMNS: [&str; 12] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "SMA",
    "STD",
    "Upper_Band",
    "Lower_Band",
    "Buy_Signal",
    "Sell_Signal",
];

/// The last few rows of an analysis, formatted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePreview {
    pub rows: Vec<[String; 12]>,
    pub total_rows: usize,
}

impl TablePreview {
    pub fn from_series(series: &SignaledSeries, max_rows: usize) -> Self {
        Self {
            rows: series.tail(max_rows).iter().map(format_row).collect(),
            total_rows: series.len(),
        }
    }

    pub fn header() -> &'static [&'static str; 12] {
        &TABLE_COLUMNS
    }

    /// Plain-text table with right-aligned columns.
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = TABLE_COLUMNS.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let render = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut lines = vec![render(TABLE_COLUMNS.to_vec())];
        for row in &self.rows {
            lines.push(render(row.iter().map(String::as_str).collect()));
        }
        lines.join("\n")
    }
}

fn format_row(row: &SignalRow) -> [String; 12] {
    [
        time_utils::epoch_ms_to_utc(row.timestamp_ms),
        format!("{:.4}", row.open),
        format!("{:.4}", row.high),
        format!("{:.4}", row.low),
        format!("{:.4}", row.close),
        format!("{:.0}", row.volume),
        format!("{:.4}", row.sma),
        format!("{:.4}", row.std),
        format!("{:.4}", row.upper_band),
        format!("{:.4}", row.lower_band),
        row.buy_signal.to_string(),
        row.sell_signal.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_series;
    use crate::domain::{BandParams, PriceBar};
    use crate::models::PriceSeries;

    const DAY: i64 = 86_400_000;

    fn analysed() -> SignaledSeries {
        let closes = [10.0, 10.0, 10.0, 10.0, 10.0, 5.0, 6.0, 7.0];
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new((19_723 + i as i64) * DAY, c, c, c, c, 1_000.0))
            .collect();
        analyze_series(&PriceSeries::from_bars("TEST", bars), BandParams::new(5, 2.0)).unwrap()
    }

    #[test]
    fn test_tail_selection() {
        let series = analysed();
        assert_eq!(series.len(), 4);

        let preview = TablePreview::from_series(&series, 2);
        assert_eq!(preview.total_rows, 4);
        assert_eq!(preview.rows.len(), 2);
        // Oldest of the tail first, newest last
        assert_eq!(preview.rows[0][0], "2024-01-07");
        assert_eq!(preview.rows[1][0], "2024-01-08");
        assert_eq!(preview.rows[1][4], "7.0000");

        let all = TablePreview::from_series(&series, 10);
        assert_eq!(all.rows.len(), 4);
        assert_eq!(all.rows[1][6], "9.0000");
        assert_eq!(all.rows[1][8], "13.4721");
        assert_eq!(all.rows[1][10], "false");
    }

    #[test]
    fn test_text_rendering() {
        let preview = TablePreview::from_series(&analysed(), 3);
        let text = preview.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Upper_Band"));
        assert!(lines[0].trim_start().starts_with("Date"));
        assert!(lines[3].contains("2024-01-08"));
        assert_eq!(TablePreview::header().len(), 12);
    }
}
