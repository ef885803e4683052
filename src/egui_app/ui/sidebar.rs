use super::style;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::AppSection;
use eframe::egui::{self, Frame, Margin, RichText};

const SIDEBAR_WIDTH: f32 = 220.0;

pub(super) fn render(ctx: &egui::Context, controller: &mut EguiController) {
    let palette = style::palette();
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .frame(
            Frame::new()
                .fill(palette.bg_primary)
                .stroke(style::card_stroke())
                .inner_margin(Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.label(
                RichText::new("AgroPredict")
                    .strong()
                    .size(20.0)
                    .color(palette.accent_emerald),
            );
            ui.label(RichText::new("Crop yield analytics").color(palette.text_muted));
            ui.add_space(16.0);
            let active = controller.ui.view.active;
            let mut target = None;
            for section in AppSection::ALL {
                let response = ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::SelectableLabel::new(section == active, section.label()),
                );
                if response.clicked() {
                    target = Some(section);
                }
                ui.add_space(2.0);
            }
            if let Some(section) = target {
                controller.navigate(section);
            }
        });
}
