//! Library exports for reuse in benchmarks and tests.
/// Read-only dataset shared by every view.
pub mod app_data;
/// Application directory resolution.
pub mod app_dirs;
/// Persistent TOML configuration.
pub mod config;
/// Synthetic crop records, search and aggregates.
pub mod dataset;
/// Shared egui UI modules.
pub mod egui_app;
/// Local yield estimation formula.
pub mod estimate;
mod http_client;
/// Commentary from the external text-generation service.
pub mod insight;
/// Tracing setup and log file rotation.
pub mod logging;
/// Fixed model-comparison metrics.
pub mod models;
