use super::style;
use crate::dataset::{CropType, Region, Season};
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::FormEdit;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let palette = style::palette();
    let mut form = controller.ui.predictor.form.clone();
    let loading = controller.ui.predictor.loading;
    let mut edits = Vec::new();
    let mut submit = false;

    ui.horizontal_top(|ui| {
        Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(style::card_stroke())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(360.0);
                ui.label(RichText::new("Field parameters").strong().size(16.0));
                ui.add_space(8.0);
                egui::Grid::new("predictor_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Crop");
                        if let Some(crop) = enum_combo(ui, "crop", form.crop, &CropType::ALL, |c| {
                            c.label()
                        }) {
                            form.crop = crop;
                            edits.push(FormEdit::Crop(crop));
                        }
                        ui.end_row();

                        ui.label("Season");
                        if let Some(season) =
                            enum_combo(ui, "season", form.season, &Season::ALL, |s| s.label())
                        {
                            form.season = season;
                            edits.push(FormEdit::Season(season));
                        }
                        ui.end_row();

                        ui.label("State");
                        if let Some(state) =
                            enum_combo(ui, "state", form.state, &Region::ALL, |r| r.label())
                        {
                            form.state = state;
                            edits.push(FormEdit::State(state));
                        }
                        ui.end_row();

                        if number_row(ui, "Rainfall (mm)", &mut form.rainfall, 10.0) {
                            edits.push(FormEdit::Rainfall(form.rainfall));
                        }
                        if number_row(ui, "Temperature (°C)", &mut form.temperature, 0.5) {
                            edits.push(FormEdit::Temperature(form.temperature));
                        }
                        if number_row(ui, "Soil pH", &mut form.ph, 0.1) {
                            edits.push(FormEdit::Ph(form.ph));
                        }
                        if number_row(ui, "Nitrogen (N)", &mut form.nitrogen, 1.0) {
                            edits.push(FormEdit::Nitrogen(form.nitrogen));
                        }
                        if number_row(ui, "Phosphorus (P)", &mut form.phosphorus, 1.0) {
                            edits.push(FormEdit::Phosphorus(form.phosphorus));
                        }
                        if number_row(ui, "Potassium (K)", &mut form.potassium, 1.0) {
                            edits.push(FormEdit::Potassium(form.potassium));
                        }
                    });
                ui.add_space(12.0);
                let label = if loading {
                    "Analyzing..."
                } else {
                    "Predict Yield"
                };
                submit = ui
                    .add_enabled(!loading, egui::Button::new(label))
                    .clicked();
            });

        ui.add_space(16.0);
        ui.vertical(|ui| render_result(ui, controller, loading));
    });

    for edit in edits {
        controller.edit_form(edit);
    }
    if submit {
        controller.submit_prediction();
    }
}

fn render_result(ui: &mut Ui, controller: &EguiController, loading: bool) {
    let palette = style::palette();
    let Some(result) = &controller.ui.predictor.result else {
        ui.label(
            RichText::new("Fill in the field parameters and press Predict Yield.")
                .color(palette.text_muted),
        );
        return;
    };
    ui.label(RichText::new("Estimated yield").color(palette.text_muted));
    ui.label(
        RichText::new(format!("{:.2} T/Ha", result.estimate))
            .strong()
            .size(32.0)
            .color(palette.accent_emerald),
    );
    ui.add_space(12.0);
    ui.label(RichText::new("AI advisory").strong());
    match &result.advisory {
        Some(text) => {
            ui.label(text);
        }
        None if loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Waiting for analysis").color(palette.text_muted));
            });
        }
        None => {}
    }
}

/// Combo box over a fixed set of enum values; returns the newly chosen one.
fn enum_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    current: T,
    options: &[T],
    label: impl Fn(T) -> &'static str,
) -> Option<T> {
    let mut value = current;
    egui::ComboBox::from_id_salt(id)
        .selected_text(label(current))
        .width(200.0)
        .show_ui(ui, |ui| {
            for &option in options {
                ui.selectable_value(&mut value, option, label(option));
            }
        });
    (value != current).then_some(value)
}

fn number_row(ui: &mut Ui, label: &str, value: &mut f64, speed: f64) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::DragValue::new(value).speed(speed).max_decimals(2))
        .changed();
    ui.end_row();
    changed
}
