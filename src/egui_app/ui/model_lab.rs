use super::charts::{self, RadarSeries};
use super::style;
use crate::egui_app::controller::EguiController;
use crate::models::{MODEL_COMPARISON, RADAR_AXES, best_model, radar_axes};
use eframe::egui::{self, Frame, Margin, RichText, Ui};

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let palette = style::palette();
    let selected = controller.ui.model_lab.selected;
    let tuning = controller.ui.model_lab.is_tuning();
    let mut select = None;
    let mut tune = false;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(260.0);
            ui.label(RichText::new("Models").strong().size(16.0));
            ui.add_space(6.0);
            for (index, model) in MODEL_COMPARISON.iter().enumerate() {
                let text = format!("{}  (R² {:.2})", model.name, model.r2);
                if ui
                    .add_sized(
                        [ui.available_width(), 28.0],
                        egui::SelectableLabel::new(index == selected, text),
                    )
                    .clicked()
                {
                    select = Some(index);
                }
            }
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Best fit: {}", best_model().name))
                    .color(palette.text_muted),
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                tune = ui
                    .add_enabled(!tuning, egui::Button::new("Auto-Tune Hyperparameters"))
                    .clicked();
                if tuning {
                    ui.spinner();
                }
            });
        });

        let model = controller.ui.model_lab.selected_model();
        Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(style::card_stroke())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(model.name).strong().size(16.0));
                    egui::Grid::new("model_metrics")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            for (name, value) in
                                [("RMSE", model.rmse), ("MAE", model.mae), ("R²", model.r2)]
                            {
                                ui.label(RichText::new(name).color(palette.text_muted));
                                ui.label(RichText::new(format!("{value:.2}")).monospace());
                                ui.end_row();
                            }
                        });
                    ui.add_space(8.0);
                    charts::radar_chart(ui, &RADAR_AXES, &comparison_series(selected));
                });
            });
    });

    if let Some(index) = select {
        controller.select_model(index);
    }
    if tune {
        controller.start_tuning();
    }
}

/// Every model as a radar series, the selected one emphasized and drawn last.
fn comparison_series(selected: usize) -> Vec<RadarSeries<'static>> {
    let mut series: Vec<RadarSeries<'static>> = MODEL_COMPARISON
        .iter()
        .enumerate()
        .map(|(index, model)| RadarSeries {
            label: model.name,
            values: radar_axes(model),
            color: style::series_color(index),
            emphasized: index == selected,
        })
        .collect();
    series.sort_by_key(|entry| entry.emphasized);
    series
}
