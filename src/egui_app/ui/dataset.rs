use super::style;
use crate::dataset::{CropRecord, DATASET_PREVIEW_LIMIT};
use crate::egui_app::controller::EguiController;
use eframe::egui::{self, RichText, Ui};

/// Soil pH below this is flagged as acidic in the table.
const ACIDIC_PH: f64 = 6.0;

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let mut search = controller.ui.view.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search crop or state...")
                .desired_width(280.0),
        );
        if response.changed() {
            controller.set_search(search);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled(false, egui::Button::new("Export CSV"))
                .on_disabled_hover_text("Export is not available");
        });
    });
    ui.add_space(12.0);

    let rows = controller.dataset_preview();
    if rows.is_empty() {
        ui.label(RichText::new("No records match the search.").color(palette.text_muted));
        return;
    }
    egui::Grid::new("dataset_grid")
        .striped(true)
        .num_columns(7)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for header in [
                "Crop",
                "Season",
                "State",
                "Rainfall (mm)",
                "Temp (°C)",
                "Soil pH",
                "Yield (T/Ha)",
            ] {
                ui.label(RichText::new(header).strong().color(palette.text_muted));
            }
            ui.end_row();
            for record in &rows {
                let [crop, season, state, rainfall, temperature, ph, yield_t_ha] =
                    row_cells(record);
                ui.label(crop);
                ui.label(season);
                ui.label(state);
                ui.label(rainfall);
                ui.label(temperature);
                let ph_color = if is_acidic(record) {
                    palette.warning
                } else {
                    palette.success
                };
                ui.label(RichText::new(ph).color(ph_color));
                ui.label(
                    RichText::new(yield_t_ha)
                        .strong()
                        .color(palette.accent_emerald),
                );
                ui.end_row();
            }
        });
    ui.add_space(8.0);
    ui.label(
        RichText::new(format!(
            "Showing up to {DATASET_PREVIEW_LIMIT} of {} records",
            controller.data().summary.record_count
        ))
        .color(palette.text_muted),
    );
}

/// Table text for one record, in column order.
fn row_cells(record: &CropRecord) -> [String; 7] {
    [
        record.crop.label().to_string(),
        record.season.label().to_string(),
        record.state.label().to_string(),
        format!("{:.1}", record.rainfall),
        format!("{:.1}", record.temperature),
        format!("{:.1}", record.ph),
        format!("{:.2}", record.yield_t_ha),
    ]
}

fn is_acidic(record: &CropRecord) -> bool {
    record.ph < ACIDIC_PH
}
