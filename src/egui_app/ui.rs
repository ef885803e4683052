//! egui renderer for the application UI.

mod charts;
mod dashboard;
mod dataset;
mod eda;
mod model_lab;
mod predictor;
mod roadmap;
mod sidebar;
pub mod style;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_data::AppData;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::AppSection;
use crate::insight::InsightSource;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window size the layout still fits in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Repaint cadence while a background job or the tuning timer is running.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(data: Arc<AppData>, insights: Arc<dyn InsightSource>) -> Self {
        Self {
            controller: EguiController::new(data, insights),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let section = self.controller.ui.view.active;
                    ui.label(RichText::new(section.label()).strong().size(18.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let records = self.controller.data().summary.record_count;
                        ui.label(
                            RichText::new(format!("{records} records"))
                                .color(palette.text_muted),
                        );
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    let response =
                        ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if !status.log.is_empty() {
                        response.on_hover_text(status.log_text());
                    }
                });
            });
    }

    fn render_section(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("section_scroll")
                    .show(ui, |ui| match self.controller.ui.view.active {
                        AppSection::Dashboard => dashboard::render(ui, &self.controller),
                        AppSection::Dataset => dataset::render(ui, &mut self.controller),
                        AppSection::Eda => eda::render(ui, &mut self.controller),
                        AppSection::Models => model_lab::render(ui, &mut self.controller),
                        AppSection::Predict => predictor::render(ui, &mut self.controller),
                        AppSection::Roadmap => roadmap::render(ui),
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick(Instant::now());
        sidebar::render(ctx, &mut self.controller);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_section(ctx);
        if self.controller.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
