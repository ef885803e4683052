use super::charts::{self, Bar};
use super::style;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::eda::FEATURE_IMPORTANCE;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

pub(super) fn render(ui: &mut Ui, controller: &mut EguiController) {
    let palette = style::palette();
    ui.label(RichText::new("Feature importance").strong().size(16.0));
    ui.label(RichText::new("Correlation with yield").color(palette.text_muted));
    ui.add_space(8.0);
    let bars: Vec<Bar<'_>> = FEATURE_IMPORTANCE
        .iter()
        .map(|&(label, weight)| Bar {
            label,
            value: f64::from(weight),
            caption: format!("{weight:.2}"),
            color: palette.accent_sky,
        })
        .collect();
    charts::bar_chart(ui, &bars, 1.0);

    ui.add_space(20.0);
    let eda = &controller.ui.eda;
    let loading = eda.loading;
    let mut request = false;
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(style::card_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("AI perspective").strong());
                let label = if loading {
                    "Generating..."
                } else {
                    "Generate perspective"
                };
                request = ui
                    .add_enabled(!loading, egui::Button::new(label))
                    .clicked();
                if loading {
                    ui.spinner();
                }
            });
            ui.add_space(6.0);
            match &eda.perspective {
                Some(text) => {
                    ui.label(text);
                }
                None => {
                    ui.label(
                        RichText::new("Ask for three quick takeaways on the dataset.")
                            .color(palette.text_muted),
                    );
                }
            }
        });
    if request {
        controller.request_eda_perspective();
    }
}
