//! Headless Bollinger report: fetch, band, signal, then print the table preview.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    report::main()
}

#[cfg(not(target_arch = "wasm32"))]
mod report {
    use anyhow::{Context, Result};
    use clap::Parser;
    use std::path::PathBuf;

    use band_sniper::config::ANALYSIS;
    use band_sniper::models::{BandSignal, SignaledSeries};
    use band_sniper::utils::time_utils;
    use band_sniper::{
        AnalysisReport, AnalysisRequest, BandParams, SourceSelection, TablePreview, run_analysis,
    };

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print the Bollinger Bands table for one symbol")]
    struct ReportArgs {
        /// Ticker symbol, e.g. AAPL
        #[arg(long, default_value = ANALYSIS.request.symbol)]
        symbol: String,

        /// First day to fetch (YYYY-MM-DD)
        #[arg(long, default_value = ANALYSIS.request.start_date)]
        start: String,

        /// Day after the last one to fetch (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Rolling window in trading days
        #[arg(long, default_value_t = ANALYSIS.bands.window)]
        window: usize,

        /// Standard deviation multiplier
        #[arg(long, default_value_t = ANALYSIS.bands.std_multiplier)]
        multiplier: f64,

        /// Number of trailing rows to print
        #[arg(long, default_value_t = ANALYSIS.preview_rows)]
        rows: usize,

        /// Read prices from a local CSV export before trying Yahoo Finance
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use the embedded demo series instead of any network or file source
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Also list every buy and sell date
        #[arg(long, default_value_t = false)]
        list_signals: bool,
    }

    pub fn main() -> Result<()> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();

        let args = ReportArgs::parse();

        let start_date = time_utils::parse_date(&args.start)?;
        let end_date = match &args.end {
            Some(text) => time_utils::parse_date(text)?,
            None => time_utils::today_local(),
        };
        let request = AnalysisRequest::new(
            &args.symbol,
            start_date,
            end_date,
            BandParams::new(args.window, args.multiplier),
        );

        let sources = SourceSelection::from_cli(args.csv.clone(), args.demo).build();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?;
        let report = rt
            .block_on(run_analysis(&sources, request))
            .with_context(|| format!("Analysis failed for {}", args.symbol))?;

        println!("{}", render_report(&report, args.rows));
        if args.list_signals {
            for line in signal_lines(&report.series) {
                println!("{}", line);
            }
        }

        Ok(())
    }

    fn render_report(report: &AnalysisReport, rows: usize) -> String {
        let series = &report.series;
        let prices = &series.banded.series;
        let mut lines = vec![
            format!(
                "Stock Data for {} ({})",
                report.request.symbol, report.source_signature
            ),
            format!(
                "{} rows fetched, {} banded (window {}, k {:.2})",
                report.raw_rows,
                series.len(),
                series.banded.window,
                series.banded.std_multiplier
            ),
        ];
        if let (Some(first), Some(last)) = (prices.first_date(), prices.last_date()) {
            lines.push(format!("Banded range {} to {}", first, last));
        }
        lines.push(String::new());
        lines.push(TablePreview::from_series(series, rows).to_text());
        lines.push(String::new());
        lines.push(format!(
            "Buy signals: {}  Sell signals: {}",
            series.buy_count(),
            series.sell_count()
        ));
        lines.join("\n")
    }

    /// One line per signal, oldest first.
    fn signal_lines(series: &SignaledSeries) -> Vec<String> {
        let mut flagged: Vec<(usize, BandSignal)> = [BandSignal::Buy, BandSignal::Sell]
            .into_iter()
            .flat_map(|signal| {
                series
                    .signal_indices(signal)
                    .into_iter()
                    .map(move |idx| (idx, signal))
            })
            .collect();
        flagged.sort_by_key(|(idx, _)| *idx);

        flagged
            .into_iter()
            .map(|(idx, signal)| {
                let row = series.row(idx);
                format!(
                    "{:<5} {}  close {:.2}",
                    signal,
                    time_utils::epoch_ms_to_utc(row.timestamp_ms),
                    row.close
                )
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use band_sniper::PriceBar;
        use band_sniper::analysis::generate_signals;
        use band_sniper::models::{BandedSeries, PriceSeries};
        use chrono::NaiveDate;

        const DAY: i64 = 86_400_000;
        // 2024-01-02 00:00 UTC
        const START_MS: i64 = 1_704_153_600_000;

        /// Flat 9..11 band around SMA 10, so the closes alone decide the signals.
        fn report_for(closes: &[f64]) -> AnalysisReport {
            let mut prices = PriceSeries::new("TEST");
            for (i, &c) in closes.iter().enumerate() {
                prices.push_bar(&PriceBar::new(START_MS + i as i64 * DAY, c, c, c, c, 1000.0));
            }
            let n = closes.len();
            let banded = BandedSeries {
                series: prices,
                sma: vec![10.0; n],
                std: vec![0.5; n],
                upper_band: vec![11.0; n],
                lower_band: vec![9.0; n],
                window: 3,
                std_multiplier: 2.0,
            };
            AnalysisReport {
                request: AnalysisRequest::new(
                    "TEST",
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    BandParams::new(3, 2.0),
                ),
                series: generate_signals(&banded).unwrap(),
                source_signature: "Canned",
                raw_rows: n + 2,
            }
        }

        #[test]
        fn test_report_summary_lines() {
            let report = report_for(&[10.0, 12.0, 10.0, 8.0, 12.0]);
            let text = render_report(&report, 2);
            let lines: Vec<&str> = text.lines().collect();

            assert_eq!(lines[0], "Stock Data for TEST (Canned)");
            assert_eq!(lines[1], "7 rows fetched, 5 banded (window 3, k 2.00)");
            assert_eq!(lines[2], "Banded range 2024-01-02 to 2024-01-06");
            assert!(lines[4].trim_start().starts_with("Date"));
            assert_eq!(lines.last().copied(), Some("Buy signals: 1  Sell signals: 2"));
        }

        #[test]
        fn test_report_table_respects_row_limit() {
            let report = report_for(&[10.0, 12.0, 10.0, 8.0, 12.0]);
            let text = render_report(&report, 2);

            assert!(!text.contains("2024-01-04"));
            assert!(text.contains("2024-01-05"));
            assert!(text.contains("2024-01-06"));
        }

        #[test]
        fn test_signal_lines_are_chronological() {
            let report = report_for(&[10.0, 12.0, 10.0, 8.0, 12.0]);
            let lines = signal_lines(&report.series);

            assert_eq!(
                lines,
                vec![
                    "SELL  2024-01-03  close 12.00".to_string(),
                    "BUY   2024-01-05  close 8.00".to_string(),
                    "SELL  2024-01-06  close 12.00".to_string(),
                ]
            );
        }

        #[test]
        fn test_quiet_series_reports_no_signals() {
            let report = report_for(&[10.0, 10.5, 9.5, 10.0]);

            assert!(signal_lines(&report.series).is_empty());
            assert!(render_report(&report, 10).ends_with("Buy signals: 0  Sell signals: 0"));
        }
    }
}
