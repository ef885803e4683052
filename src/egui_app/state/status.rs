use egui::Color32;

use crate::egui_app::ui::style::{StatusTone, status_badge_color};

/// Maximum entries kept in the rolling status log.
const MAX_LOG_ENTRIES: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before anything happened.
    pub fn idle() -> Self {
        Self {
            text: "Dataset loaded".into(),
            badge_label: StatusTone::Idle.label().into(),
            badge_color: status_badge_color(StatusTone::Idle),
            log: Vec::new(),
        }
    }

    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = text.into();
        self.badge_label = tone.label().into();
        self.badge_color = status_badge_color(tone);
        self.log.push(self.text.clone());
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
    }

    /// Recent messages, newest last, one per line.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}
