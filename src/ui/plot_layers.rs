use eframe::egui::Stroke;
use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{BandChart, SignalMarker};
use crate::ui::app::PlotVisibility;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub chart: &'a BandChart,
    pub visibility: &'a PlotVisibility,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. BAND FILL LAYER (shaded region between the bands)
// ============================================================================
pub struct BandFillLayer;

impl PlotLayer for BandFillLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.fill {
            return;
        }

        let fill = PLOT_CONFIG
            .band_fill_color
            .linear_multiply(PLOT_CONFIG.band_fill_opacity_pct);

        // One convex quad per day pair; egui_plot only fills convex polygons correctly.
        // Shared name groups them under a single legend entry.
        for quad in &ctx.chart.fill_segments {
            let polygon = Polygon::new(UI_TEXT.label_band_fill, PlotPoints::new(quad.to_vec()))
                .fill_color(fill)
                .stroke(Stroke::NONE);
            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// 2. BAND LINES LAYER (upper and lower, dashed)
// ============================================================================
pub struct BandLinesLayer;

impl PlotLayer for BandLinesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.bands {
            return;
        }

        let bands = [
            (UI_TEXT.label_upper_band, &ctx.chart.upper, PLOT_CONFIG.upper_band_color),
            (UI_TEXT.label_lower_band, &ctx.chart.lower, PLOT_CONFIG.lower_band_color),
        ];
        for (label, points, color) in bands {
            plot_ui.line(
                Line::new(label, PlotPoints::new(points.clone()))
                    .color(color)
                    .width(PLOT_CONFIG.band_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 3. CLOSE PRICE LAYER
// ============================================================================
pub struct ClosePriceLayer;

impl PlotLayer for ClosePriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.close_price {
            return;
        }

        let color = PLOT_CONFIG
            .close_price_color
            .linear_multiply(PLOT_CONFIG.close_price_opacity_pct);
        plot_ui.line(
            Line::new(UI_TEXT.label_close_price, PlotPoints::new(ctx.chart.close.clone()))
                .color(color)
                .width(PLOT_CONFIG.close_price_line_width),
        );
    }
}

// ============================================================================
// 4. SIGNAL MARKERS LAYER (triangles at the close)
// ============================================================================
pub struct SignalMarkersLayer;

impl PlotLayer for SignalMarkersLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.signals {
            return;
        }

        draw_markers(
            plot_ui,
            &ctx.chart.buy_markers,
            UI_TEXT.label_buy_signal,
            MarkerShape::Up,
            PLOT_CONFIG.buy_marker_color,
        );
        draw_markers(
            plot_ui,
            &ctx.chart.sell_markers,
            UI_TEXT.label_sell_signal,
            MarkerShape::Down,
            PLOT_CONFIG.sell_marker_color,
        );
    }
}

fn draw_markers(
    plot_ui: &mut PlotUi,
    markers: &[SignalMarker],
    label: &str,
    shape: MarkerShape,
    color: eframe::egui::Color32,
) {
    if markers.is_empty() {
        return;
    }
    let points: Vec<[f64; 2]> = markers.iter().map(|m| [m.x, m.price]).collect();
    plot_ui.points(
        Points::new(label, PlotPoints::new(points))
            .shape(shape)
            .color(color)
            .filled(true)
            .radius(PLOT_CONFIG.marker_radius),
    );
}
