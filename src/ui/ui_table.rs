use eframe::egui::{Grid, RichText, ScrollArea, Ui};

use crate::models::TablePreview;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

// Column positions of the two signal flags in the preview row
const BUY_COLUMN: usize = 10;
const SELL_COLUMN: usize = 11;

pub fn render_table_preview(ui: &mut Ui, table: &TablePreview) {
    ScrollArea::horizontal()
        .id_salt("table_preview")
        .max_height(UI_CONFIG.table_height)
        .show(ui, |ui| {
            Grid::new("table_preview_grid")
                .num_columns(TablePreview::header().len())
                .spacing([14.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for title in TablePreview::header() {
                        ui.label(RichText::new(*title).strong().monospace());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for (col, cell) in row.iter().enumerate() {
                            let text = RichText::new(cell).monospace();
                            let text = match col {
                                BUY_COLUMN if cell == "true" => text.color(UI_CONFIG.colors.buy_text),
                                SELL_COLUMN if cell == "true" => text.color(UI_CONFIG.colors.sell_text),
                                _ => text,
                            };
                            ui.label(text);
                        }
                        ui.end_row();
                    }
                });
        });

    ui.label_subdued(format!(
        "Showing last {} of {} rows",
        table.rows.len(),
        table.total_rows
    ));
}
