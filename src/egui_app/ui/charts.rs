//! Small painter-drawn charts shared by the section views.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::style;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

const BAR_HEIGHT: f32 = 18.0;
const BAR_GAP: f32 = 8.0;
const LABEL_WIDTH: f32 = 120.0;

/// One horizontal bar: label, value, and the value shown at the bar's end.
pub(super) struct Bar<'a> {
    pub label: &'a str,
    pub value: f64,
    pub caption: String,
    pub color: Color32,
}

/// Horizontal bars scaled so `max` fills the available width.
pub(super) fn bar_chart(ui: &mut Ui, bars: &[Bar<'_>], max: f64) {
    let palette = style::palette();
    let width = ui.available_width().max(LABEL_WIDTH * 2.0);
    let height = bars.len() as f32 * (BAR_HEIGHT + BAR_GAP);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let origin = response.rect.min;
    let track = width - LABEL_WIDTH - 60.0;
    for (row, bar) in bars.iter().enumerate() {
        let top = origin.y + row as f32 * (BAR_HEIGHT + BAR_GAP);
        painter.text(
            Pos2::new(origin.x, top + BAR_HEIGHT / 2.0),
            Align2::LEFT_CENTER,
            bar.label,
            FontId::proportional(13.0),
            palette.text_primary,
        );
        let track_rect = egui::Rect::from_min_size(
            Pos2::new(origin.x + LABEL_WIDTH, top),
            Vec2::new(track, BAR_HEIGHT),
        );
        painter.rect_filled(track_rect, 0.0, palette.grid_soft);
        let ratio = if max > 0.0 {
            (bar.value / max).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let fill_rect =
            egui::Rect::from_min_size(track_rect.min, Vec2::new(track * ratio, BAR_HEIGHT));
        painter.rect_filled(fill_rect, 0.0, bar.color);
        painter.text(
            Pos2::new(track_rect.max.x + 8.0, top + BAR_HEIGHT / 2.0),
            Align2::LEFT_CENTER,
            &bar.caption,
            FontId::monospace(12.0),
            palette.text_muted,
        );
    }
}

/// One polygon on the radar chart.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct RadarSeries<'a> {
    pub label: &'a str,
    /// One value per axis, expected in `[0, 1]`.
    pub values: [f64; 4],
    pub color: Color32,
    /// Drawn with a stronger fill and outline.
    pub emphasized: bool,
}

/// Radar with one spoke per axis, overlaying every series, plus a legend.
///
/// Series are painted in slice order, so the last one ends up on top.
pub(super) fn radar_chart(ui: &mut Ui, labels: &[&str], series: &[RadarSeries<'_>]) {
    let palette = style::palette();
    let size = 260.0;
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    let center = response.rect.center();
    let radius = size / 2.0 - 40.0;
    let spokes = labels.len().max(1);
    let point = |index: usize, scale: f32| {
        let angle = index as f32 / spokes as f32 * TAU - FRAC_PI_2;
        center + Vec2::angled(angle) * radius * scale
    };
    for ring in [0.25, 0.5, 0.75, 1.0] {
        let outline: Vec<Pos2> = (0..spokes).map(|i| point(i, ring)).collect();
        painter.add(Shape::closed_line(outline, Stroke::new(1.0, palette.grid_soft)));
    }
    for (index, label) in labels.iter().enumerate() {
        painter.line_segment(
            [center, point(index, 1.0)],
            Stroke::new(1.0, palette.panel_outline),
        );
        painter.text(
            point(index, 1.22),
            Align2::CENTER_CENTER,
            *label,
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }
    for entry in series {
        let (fill_alpha, stroke_width) = if entry.emphasized {
            (0.35, 2.5)
        } else {
            (0.1, 1.0)
        };
        let outline: Vec<Pos2> = entry
            .values
            .iter()
            .take(spokes)
            .enumerate()
            .map(|(index, value)| point(index, value.clamp(0.0, 1.0) as f32))
            .collect();
        // Fan from the centre; the outline need not be convex.
        let fill = entry.color.gamma_multiply(fill_alpha);
        for (index, corner) in outline.iter().enumerate() {
            let next = outline[(index + 1) % outline.len()];
            painter.add(Shape::convex_polygon(
                vec![center, *corner, next],
                fill,
                Stroke::NONE,
            ));
        }
        painter.add(Shape::closed_line(
            outline,
            Stroke::new(stroke_width, entry.color),
        ));
    }
    ui.horizontal_wrapped(|ui| {
        for entry in series {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 0.0, entry.color);
            let text = egui::RichText::new(entry.label).color(if entry.emphasized {
                palette.text_primary
            } else {
                palette.text_muted
            });
            ui.label(text);
            ui.add_space(8.0);
        }
    });
}
