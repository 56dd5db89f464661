//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_price_color: Color32,
    pub upper_band_color: Color32,
    pub lower_band_color: Color32,
    pub band_fill_color: Color32,
    pub buy_marker_color: Color32,
    pub sell_marker_color: Color32,
    /// Opacity of the close price line (0.0 = invisible, 1.0 = fully opaque)
    pub close_price_opacity_pct: f32,
    /// Opacity of the shaded region between the bands
    pub band_fill_opacity_pct: f32,
    pub close_price_line_width: f32,
    pub band_line_width: f32,
    pub marker_radius: f32,
    /// Plot aspect ratio (width:height)
    pub plot_aspect_ratio: f32,
    /// Fraction of the price span added above and below the data
    pub y_padding_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_price_color: Color32::from_rgb(30, 100, 255), // Blue
    upper_band_color: Color32::from_rgb(220, 40, 40),   // Red
    lower_band_color: Color32::from_rgb(40, 170, 40),   // Green
    band_fill_color: Color32::GRAY,
    buy_marker_color: Color32::from_rgb(0, 200, 0),
    sell_marker_color: Color32::from_rgb(230, 0, 0),
    close_price_opacity_pct: 0.5,
    band_fill_opacity_pct: 0.1,
    close_price_line_width: 1.5,
    band_line_width: 1.2,
    marker_radius: 6.0,
    plot_aspect_ratio: 2.0,
    y_padding_pct: 0.05,
};
