use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window,
};
use strum::IntoEnumIterator;

use crate::ui::app::BandLayer;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{InputEvent, InputPanel, Panel, ViewPanel};
use crate::ui::ui_table::render_table_preview;
use crate::ui::utils::format_price;

use super::app::BandSniperApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

const SHORTCUT_KEYS: [Key; 4] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4];

impl BandSniperApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let busy = self.is_analyzing();
                let (input_events, view_events) = ScrollArea::vertical()
                    .id_salt("side_panel_scroll")
                    .show(ui, |ui| {
                        let input_events = InputPanel::new(&self.inputs, busy).render(ui);
                        let view_events = ViewPanel::new(self.plot_visibility).render(ui);
                        (input_events, view_events)
                    })
                    .inner;

                for event in input_events {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Input event: {:?}", event);
                    }
                    match event {
                        InputEvent::Symbol(symbol) => self.inputs.symbol = symbol,
                        InputEvent::StartDate(date) => self.inputs.start_date = date,
                        InputEvent::EndDate(date) => self.inputs.end_date = date,
                        InputEvent::Window(window) => self.inputs.window = window,
                        InputEvent::Multiplier(k) => self.inputs.std_multiplier = k,
                        InputEvent::Analyze => self.start_analysis(),
                    }
                }

                for (layer, visible) in view_events {
                    self.plot_visibility.set(layer, visible);
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.app_title)
                        .size(24.0)
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(10.0);

                if self.is_analyzing() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(UI_TEXT.fetching_data);
                    });
                    return;
                }

                if let Some(error) = &self.data_state.last_error {
                    ui.label_error(UI_TEXT.error_heading);
                    ui.add_space(4.0);
                    ui.label(error.to_string());
                    ui.add_space(4.0);
                    ui.label_subdued(UI_TEXT.error_hint);
                    return;
                }

                ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .show(ui, |ui| self.render_results(ui));
            });
    }

    fn render_results(&mut self, ui: &mut Ui) {
        let (Some(report), Some(table), Some(chart)) = (
            &self.data_state.report,
            &self.data_state.table,
            &self.data_state.chart,
        ) else {
            ui.label_subdued(UI_TEXT.empty_prompt);
            return;
        };

        let symbol = report.request.symbol.as_str();
        ui.label_subheader(format!("{}{}", UI_TEXT.stock_data_heading_prefix, symbol));
        ui.add_space(4.0);
        render_table_preview(ui, table);

        ui.add_space(16.0);
        ui.label_subheader(format!("{}{}", UI_TEXT.chart_title_prefix, symbol));
        ui.add_space(4.0);
        if chart.is_empty() {
            ui.label_warning(format!("No banded rows to plot for {}", symbol));
        } else {
            self.plot_view
                .show_band_plot(ui, chart, &self.plot_visibility);
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let Some(report) = &self.data_state.report else {
                        ui.label_subdued("No data loaded");
                        return;
                    };
                    let series = &report.series;

                    ui.metric("📡 Source", report.source_signature, Color32::from_rgb(100, 200, 255));
                    ui.separator();
                    let prices = &series.banded.series;
                    ui.metric(
                        "📅 Range",
                        &format!(
                            "{} → {}",
                            prices.first_date().unwrap_or_default(),
                            prices.last_date().unwrap_or_default()
                        ),
                        Color32::from_rgb(180, 200, 255),
                    );
                    ui.separator();
                    ui.metric(
                        "Rows",
                        &format!("{} raw / {} banded", report.raw_rows, series.len()),
                        Color32::LIGHT_GRAY,
                    );
                    ui.separator();
                    ui.metric(
                        "Bands",
                        &format!(
                            "w={} k={:.1}",
                            series.banded.window, series.banded.std_multiplier
                        ),
                        Color32::LIGHT_GRAY,
                    );
                    ui.separator();
                    ui.metric("▲ Buy", &series.buy_count().to_string(), UI_CONFIG.colors.buy_text);
                    ui.metric("▼ Sell", &series.sell_count().to_string(), UI_CONFIG.colors.sell_text);

                    if let Some(last) = series.tail(1).first() {
                        ui.separator();
                        ui.metric("Last close", &format_price(last.close), Color32::from_rgb(255, 200, 100));
                    }
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        let layer_rows: Vec<(String, String)> = BandLayer::iter()
            .enumerate()
            .map(|(idx, layer)| ((idx + 1).to_string(), format!("Toggle {}", layer)))
            .collect();

        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                let mut rows: Vec<(&str, &str)> = vec![
                    ("H", UI_TEXT.help_toggle),
                    ("Esc", "Close this panel"),
                    ("Enter", UI_TEXT.help_analyze),
                ];
                rows.extend(
                    layer_rows
                        .iter()
                        .map(|(key, desc)| (key.as_str(), desc.as_str())),
                );

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &rows);
                    });
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Keys typed into the symbol or date fields are not shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            for (key, layer) in SHORTCUT_KEYS.iter().zip(BandLayer::iter()) {
                if i.key_pressed(*key) {
                    self.plot_visibility.toggle(layer);
                }
            }

            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
        });
    }
}
