//! Persistent dashboard settings stored as TOML in the app directory.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save_to_path};
pub use types::{AppConfig, DatasetSettings, InsightSettings};
