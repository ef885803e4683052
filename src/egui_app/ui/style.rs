use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_emerald: Color32,
    pub accent_sky: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 16, 14),
        bg_secondary: Color32::from_rgb(22, 28, 26),
        bg_tertiary: Color32::from_rgb(36, 44, 41),
        panel_outline: Color32::from_rgb(44, 54, 50),
        grid_soft: Color32::from_rgb(30, 38, 35),
        text_primary: Color32::from_rgb(214, 222, 218),
        text_muted: Color32::from_rgb(140, 152, 147),
        accent_emerald: Color32::from_rgb(16, 185, 129),
        accent_sky: Color32::from_rgb(59, 130, 246),
        warning: Color32::from_rgb(234, 128, 60),
        success: Color32::from_rgb(102, 176, 136),
    }
}

/// One colour per crop in the dashboard chart, cycled by index.
pub const SERIES_COLORS: [Color32; 6] = [
    Color32::from_rgb(16, 185, 129),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(245, 158, 11),
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(139, 92, 246),
    Color32::from_rgb(236, 72, 153),
];

pub fn series_color(index: usize) -> Color32 {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_sky;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.grid_soft;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_emerald);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Severity of the footer status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Busy => "Working",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
    }
}
