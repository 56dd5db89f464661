use eframe::egui::{Button, Key, Slider, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
use crate::ui::app::{BandLayer, InputState, PlotVisibility};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, spaced_separator};
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum InputEvent {
    Symbol(String),
    StartDate(String),
    EndDate(String),
    Window(usize),
    Multiplier(f64),
    Analyze,
}

/// Symbol, date range and band parameters, plus the Analyze trigger
pub struct InputPanel {
    inputs: InputState,
    busy: bool,
}

impl InputPanel {
    pub fn new(inputs: &InputState, busy: bool) -> Self {
        Self {
            inputs: inputs.clone(),
            busy,
        }
    }

    /// Single-line text field. Returns (changed, submitted with Enter).
    fn text_field(ui: &mut Ui, value: &mut String, hint: &str) -> (bool, bool) {
        let response = ui.add(TextEdit::singleline(value).hint_text(hint));
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        (response.changed(), submitted)
    }

    fn render_date_field(
        ui: &mut Ui,
        label: &str,
        value: &mut String,
        submit: &mut bool,
    ) -> bool {
        ui.label_subheader(label);
        let (changed, submitted) = Self::text_field(ui, value, UI_TEXT.date_hint);
        *submit |= submitted;
        if let Err(e) = time_utils::parse_date(value) {
            ui.label_warning(format!("{:#}", e));
        }
        changed
    }

    fn render_band_sliders(&mut self, ui: &mut Ui, events: &mut Vec<InputEvent>) {
        section_heading(ui, UI_TEXT.bands_heading);

        ui.label_subheader(UI_TEXT.window_label);
        let response = ui.add(
            Slider::new(
                &mut self.inputs.window,
                ANALYSIS.limits.min_window..=ANALYSIS.limits.max_window,
            )
            .integer(),
        );
        if response.changed() {
            events.push(InputEvent::Window(self.inputs.window));
        }

        ui.label_subheader(UI_TEXT.multiplier_label);
        let response = ui.add(
            Slider::new(
                &mut self.inputs.std_multiplier,
                0.0..=ANALYSIS.limits.max_std_multiplier,
            )
            .step_by(0.1)
            .fixed_decimals(1),
        );
        if response.changed() {
            events.push(InputEvent::Multiplier(self.inputs.std_multiplier));
        }
    }
}

impl Panel for InputPanel {
    type Event = InputEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let mut submit = false;
        section_heading(ui, UI_TEXT.inputs_heading);

        ui.label_subheader(UI_TEXT.symbol_label);
        let (changed, submitted) =
            Self::text_field(ui, &mut self.inputs.symbol, UI_TEXT.symbol_hint);
        submit |= submitted;
        if changed {
            events.push(InputEvent::Symbol(self.inputs.symbol.clone()));
        }

        ui.add_space(5.0);
        if Self::render_date_field(
            ui,
            UI_TEXT.start_date_label,
            &mut self.inputs.start_date,
            &mut submit,
        ) {
            events.push(InputEvent::StartDate(self.inputs.start_date.clone()));
        }

        ui.add_space(5.0);
        if Self::render_date_field(
            ui,
            UI_TEXT.end_date_label,
            &mut self.inputs.end_date,
            &mut submit,
        ) {
            events.push(InputEvent::EndDate(self.inputs.end_date.clone()));
        }

        spaced_separator(ui);
        self.render_band_sliders(ui, &mut events);
        spaced_separator(ui);

        let button = Button::new(UI_TEXT.analyze_button).min_size([120.0, 28.0].into());
        if ui.add_enabled(!self.busy, button).clicked() {
            submit = true;
        }
        if self.busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label_subdued(UI_TEXT.analyze_busy);
            });
        }

        if submit && !self.busy {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Analyze requested for {:?}", self.inputs.symbol);
            }
            events.push(InputEvent::Analyze);
        }

        ui.add_space(20.0);
        events
    }
}

/// Panel for chart layer toggles
pub struct ViewPanel {
    visibility: PlotVisibility,
}

impl ViewPanel {
    pub fn new(visibility: PlotVisibility) -> Self {
        Self { visibility }
    }
}

impl Panel for ViewPanel {
    type Event = (BandLayer, bool);
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.view_options_heading);

        for (idx, layer) in BandLayer::iter().enumerate() {
            let mut visible = self.visibility.is_visible(layer);
            let label = format!("{} {}", idx + 1, layer);
            if ui.checkbox(&mut visible, label).changed() {
                self.visibility.set(layer, visible);
                events.push((layer, visible));
            }
        }

        ui.add_space(20.0);
        events
    }
}
