use eframe::{Frame, egui};
use poll_promise::Promise;
use strum_macros::{Display, EnumIter};

use crate::analysis::{AnalysisError, AnalysisReport};
use crate::config::ANALYSIS;
use crate::data::SourceSelection;
use crate::domain::{AnalysisRequest, BandParams};
use crate::models::{BandChart, TablePreview};
use crate::ui::app_async::AsyncAnalysisResult;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::time_utils::{self, TimeUtils};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Raw contents of the input widgets. Dates stay as text until Analyze is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub symbol: String,
    pub start_date: String,
    pub end_date: String,
    pub window: usize,
    pub std_multiplier: f64,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            symbol: ANALYSIS.request.symbol.to_string(),
            start_date: ANALYSIS.request.start_date.to_string(),
            end_date: time_utils::today_local()
                .format(TimeUtils::STANDARD_TIME_FORMAT)
                .to_string(),
            window: ANALYSIS.bands.window,
            std_multiplier: ANALYSIS.bands.std_multiplier,
        }
    }
}

impl InputState {
    /// Turn the widget contents into an explicit, validated request.
    pub fn to_request(&self) -> Result<AnalysisRequest, AnalysisError> {
        let parse = |text: &str| {
            time_utils::parse_date(text)
                .map_err(|e| AnalysisError::InvalidParameter(format!("{:#}", e)))
        };
        let request = AnalysisRequest::new(
            &self.symbol,
            parse(&self.start_date)?,
            parse(&self.end_date)?,
            BandParams::new(self.window, self.std_multiplier),
        );
        request.validate()?;
        Ok(request)
    }
}

/// Independently toggleable chart layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum BandLayer {
    #[strum(to_string = "Close Price")]
    ClosePrice,
    #[strum(to_string = "Bollinger Bands")]
    Bands,
    #[strum(to_string = "Band Fill")]
    Fill,
    #[strum(to_string = "Buy/Sell Signals")]
    Signals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotVisibility {
    pub close_price: bool,
    pub bands: bool,
    pub fill: bool,
    pub signals: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            close_price: true,
            bands: true,
            fill: true,
            signals: true,
        }
    }
}

impl PlotVisibility {
    fn flag_mut(&mut self, layer: BandLayer) -> &mut bool {
        match layer {
            BandLayer::ClosePrice => &mut self.close_price,
            BandLayer::Bands => &mut self.bands,
            BandLayer::Fill => &mut self.fill,
            BandLayer::Signals => &mut self.signals,
        }
    }

    pub fn is_visible(&self, layer: BandLayer) -> bool {
        match layer {
            BandLayer::ClosePrice => self.close_price,
            BandLayer::Bands => self.bands,
            BandLayer::Fill => self.fill,
            BandLayer::Signals => self.signals,
        }
    }

    pub fn set(&mut self, layer: BandLayer, visible: bool) {
        *self.flag_mut(layer) = visible;
    }

    pub fn toggle(&mut self, layer: BandLayer) {
        let flag = self.flag_mut(layer);
        *flag = !*flag;
    }
}

/// Everything derived from the last finished run. Replaced wholesale on each run.
#[derive(Default)]
pub struct DataState {
    pub report: Option<AnalysisReport>,
    pub chart: Option<BandChart>,
    pub table: Option<TablePreview>,
    pub last_error: Option<AnalysisError>,
}

impl DataState {
    pub fn from_report(report: AnalysisReport) -> Self {
        Self {
            chart: Some(BandChart::from_series(&report.series)),
            table: Some(TablePreview::from_series(
                &report.series,
                ANALYSIS.preview_rows,
            )),
            report: Some(report),
            last_error: None,
        }
    }

    pub fn from_error(error: AnalysisError) -> Self {
        Self {
            last_error: Some(error),
            ..Default::default()
        }
    }
}

pub struct BandSniperApp {
    pub(super) inputs: InputState,
    pub(super) source_selection: SourceSelection,
    pub(super) data_state: DataState,
    pub(super) plot_view: PlotView,
    pub(super) plot_visibility: PlotVisibility,

    // Help panel visibility
    pub(super) show_help: bool,

    // At most one analysis in flight
    pub(super) analysis_promise: Option<Promise<AsyncAnalysisResult>>,
}

impl BandSniperApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        source_selection: SourceSelection,
        symbol: Option<String>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut inputs = InputState::default();
        if let Some(symbol) = symbol {
            inputs.symbol = symbol;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Starting with {:?} and inputs {:?}",
                source_selection,
                inputs
            );
        }

        Self {
            inputs,
            source_selection,
            data_state: DataState::default(),
            plot_view: PlotView::new(),
            plot_visibility: PlotVisibility::default(),
            show_help: false,
            analysis_promise: None,
        }
    }
}

impl eframe::App for BandSniperApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight run so its sender goes away before the runtime does
        self.analysis_promise = None;
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_analysis(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}
