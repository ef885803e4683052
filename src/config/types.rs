use serde::{Deserialize, Serialize};

use super::defaults::{
    clamp_record_count, clamp_temperature, clamp_top_p, default_api_key_env, default_base_url,
    default_model, default_record_count, default_temperature, default_top_p,
};

/// Everything the dashboard reads from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub insight: InsightSettings,
}

impl AppConfig {
    pub(crate) fn normalized(self) -> Self {
        Self {
            dataset: self.dataset.normalized(),
            insight: self.insight.normalized(),
        }
    }
}

/// Shape of the synthetic dataset generated at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Number of records to generate.
    #[serde(default = "default_record_count")]
    pub record_count: usize,
    /// Fixed RNG seed; `None` draws fresh values every launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            seed: None,
        }
    }
}

impl DatasetSettings {
    fn normalized(mut self) -> Self {
        self.record_count = clamp_record_count(self.record_count);
        self
    }
}

/// Endpoint, model and sampling options for the text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSettings {
    /// Service root, without the `/v1beta/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature sent with predictor requests.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Nucleus-sampling probability sent with predictor requests.
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl InsightSettings {
    fn normalized(mut self) -> Self {
        self.temperature = clamp_temperature(self.temperature);
        self.top_p = clamp_top_p(self.top_p);
        if self.api_key_env.trim().is_empty() {
            self.api_key_env = default_api_key_env();
        }
        self
    }
}
