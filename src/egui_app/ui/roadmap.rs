use super::style;
use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};

/// Lifecycle steps in order; the last one is where the project stands.
const STEPS: [(&str, &str); 6] = [
    (
        "Data Collection",
        "Source a thousand or more environmental and agricultural records.",
    ),
    (
        "Data Cleaning",
        "Handle missing values, drop rainfall outliers and encode categories.",
    ),
    (
        "EDA & Insights",
        "Inspect crop distributions and collinearity between NPK levels.",
    ),
    (
        "Model Selection",
        "Compare Linear Regression, Decision Tree and Random Forest.",
    ),
    (
        "Hyperparameter Tuning",
        "Search Random Forest depth and estimator counts.",
    ),
    (
        "Deployment",
        "Serve the chosen model behind the dashboard.",
    ),
];

pub(super) fn render(ui: &mut Ui) {
    let palette = style::palette();
    ui.label(RichText::new("Machine learning lifecycle").strong().size(16.0));
    ui.add_space(10.0);
    let current = STEPS.len() - 1;
    for (index, (title, detail)) in STEPS.iter().enumerate() {
        let is_current = index == current;
        let stroke = if is_current {
            Stroke::new(2.0, palette.accent_emerald)
        } else {
            style::card_stroke()
        };
        Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(stroke)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{:02}", index + 1))
                            .monospace()
                            .color(palette.text_muted),
                    );
                    ui.label(RichText::new(*title).strong());
                    if is_current {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(RichText::new("Current").color(palette.accent_emerald));
                            },
                        );
                    }
                });
                ui.label(RichText::new(*detail).color(palette.text_muted));
            });
        ui.add_space(6.0);
    }
}
