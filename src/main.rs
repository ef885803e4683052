#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based AgroPredict dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use agropredict::app_data::AppData;
use agropredict::config::{self, AppConfig};
use agropredict::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use agropredict::insight::GeminiInsights;
use agropredict::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        AppConfig::default()
    });
    let data = AppData::generate(&config.dataset);
    let insights = Arc::new(GeminiInsights::new(config.insight));

    let viewport = egui::ViewportBuilder::default()
        .with_title("AgroPredict")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([1280.0, 820.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "AgroPredict",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(data, insights)))),
    )?;
    Ok(())
}
