use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::BandChart;
use crate::ui::app::PlotVisibility;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use crate::ui::plot_layers::{
    BandFillLayer, BandLinesLayer, ClosePriceLayer, LayerContext, PlotLayer, SignalMarkersLayer,
};

/// Owns the plot's view state across frames.
#[derive(Default)]
pub struct PlotView {
    /// Set when a new chart arrives so the next frame snaps the bounds to it
    needs_reset: bool,
}

impl PlotView {
    pub fn new() -> Self {
        Self { needs_reset: true }
    }

    pub fn reset_view(&mut self) {
        self.needs_reset = true;
    }

    pub fn show_band_plot(
        &mut self,
        ui: &mut egui::Ui,
        chart: &BandChart,
        visibility: &PlotVisibility,
    ) {
        let reset = std::mem::take(&mut self.needs_reset);

        #[cfg(debug_assertions)]
        if reset && DEBUG_FLAGS.print_plot_bounds {
            log::info!(
                "Plot bounds for {}: x {:.1}..{:.1}, y {:.2}..{:.2}",
                chart.symbol,
                chart.x_min,
                chart.x_max,
                chart.y_min,
                chart.y_max
            );
        }

        let legend = Legend::default().position(Corner::LeftTop);

        Plot::new("band_plot")
            .view_aspect(PLOT_CONFIG.plot_aspect_ratio)
            .legend(legend)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis(&chart.symbol)])
            .label_formatter(|name, value| {
                let date = time_utils::days_to_utc(value.x);
                if name.is_empty() {
                    format!("{}\n${:.2}", date, value.y)
                } else {
                    format!("{}\n{}\n${:.2}", name, date, value.y)
                }
            })
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if reset {
                    plot_ui.set_plot_bounds_x(chart.x_min..=chart.x_max);
                    plot_ui.set_plot_bounds_y(chart.y_min..=chart.y_max);
                }

                let ctx = LayerContext { chart, visibility };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(BandFillLayer),
                    Box::new(BandLinesLayer),
                    Box::new(ClosePriceLayer),
                    Box::new(SignalMarkersLayer),
                ];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| time_utils::days_to_utc(grid_mark.value))
}

fn create_y_axis(symbol: &str) -> AxisHints<'static> {
    let label = format!("{}  {}", symbol, UI_TEXT.plot_y_axis);
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format!("${:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
