use std::f32::consts::{FRAC_PI_2, TAU};

use super::charts::{self, Bar};
use super::style;
use crate::egui_app::controller::EguiController;
use eframe::egui::{
    Align2, FontId, Frame, Margin, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2,
};

/// Share of the historical benchmark the current allocation reaches.
const YIELD_EFFICIENCY: f32 = 0.82;
const GAUGE_SEGMENTS: usize = 64;

pub(super) fn render(ui: &mut Ui, controller: &EguiController) {
    let summary = &controller.data().summary;
    let palette = style::palette();
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Avg. Yield", format!("{:.2} T/Ha", summary.avg_yield));
        stat_card(ui, "Avg. Rainfall", format!("{:.0} mm", summary.avg_rainfall));
        stat_card(ui, "Avg. Temp", format!("{:.1} °C", summary.avg_temperature));
        stat_card(ui, "Crop Varieties", summary.crop_varieties().to_string());
    });
    ui.add_space(20.0);
    ui.label(RichText::new("Average yield by crop").strong().size(16.0));
    ui.label(RichText::new("Tonnes per hectare").color(palette.text_muted));
    ui.add_space(8.0);
    let bars: Vec<Bar<'_>> = summary
        .per_crop
        .iter()
        .enumerate()
        .map(|(index, entry)| Bar {
            label: entry.crop.label(),
            value: entry.avg_yield,
            caption: format!("{:.2}", entry.avg_yield),
            color: style::series_color(index),
        })
        .collect();
    charts::bar_chart(ui, &bars, summary.max_crop_yield());
    ui.add_space(20.0);
    efficiency_card(ui);
}

fn efficiency_card(ui: &mut Ui) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(style::card_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.label(RichText::new("Yield Efficiency Target").strong().size(16.0));
            ui.horizontal(|ui| {
                let (response, painter) =
                    ui.allocate_painter(Vec2::splat(140.0), Sense::hover());
                let center = response.rect.center();
                let radius = 56.0;
                painter.circle_stroke(center, radius, Stroke::new(8.0, palette.grid_soft));
                painter.add(Shape::line(
                    gauge_arc(center, radius, YIELD_EFFICIENCY),
                    Stroke::new(8.0, palette.accent_emerald),
                ));
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    format!("{:.0}%", YIELD_EFFICIENCY * 100.0),
                    FontId::proportional(26.0),
                    palette.accent_emerald,
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new("OPTIMIZED").color(palette.text_muted));
                    ui.label(
                        RichText::new(
                            "Current resource allocation vs historical yield benchmarks \
                             shows high correlation with optimal nitrogen levels.",
                        )
                        .color(palette.text_muted),
                    );
                });
            });
        });
}

/// Clockwise arc from twelve o'clock covering `fraction` of the circle.
fn gauge_arc(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    let steps = ((GAUGE_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
    (0..=steps)
        .map(|step| {
            let angle = step as f32 / steps as f32 * fraction * TAU - FRAC_PI_2;
            center + Vec2::angled(angle) * radius
        })
        .collect()
}

fn stat_card(ui: &mut Ui, title: &str, value: String) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(style::card_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).color(palette.text_muted));
                ui.label(
                    RichText::new(value)
                        .strong()
                        .size(22.0)
                        .color(palette.accent_emerald),
                );
            });
        });
}
