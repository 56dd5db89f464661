#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisError, AnalysisReport, analyze_series, run_analysis};
pub use data::{PriceSource, SourceSelection, YahooSource};
pub use domain::{AnalysisRequest, BandParams, PriceBar};
pub use models::{PriceSeries, SignaledSeries, TablePreview};
pub use ui::BandSniperApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read daily prices from a local CSV export before trying Yahoo Finance
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Ticker to prefill in the symbol field
    #[arg(long)]
    pub symbol: Option<String>,

    /// Use the embedded demo series instead of any network or file source
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: Cli) -> Box<dyn eframe::App> {
    let selection = SourceSelection::from_cli(args.csv, args.demo);
    let app = ui::BandSniperApp::new(cc, selection, args.symbol);
    Box::new(app)
}
