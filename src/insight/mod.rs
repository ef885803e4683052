//! Commentary from the external text-generation service.
//!
//! Callers never see a failure: every error is logged and replaced by a fixed
//! apology string.

pub mod api;
pub mod credential;
pub mod prompt;

use crate::config::InsightSettings;
use crate::dataset::CropRecord;
use crate::estimate::PredictionForm;

pub use api::{GenerationConfig, InsightError};

/// Advisory shown when the predictor's analysis call fails.
pub const YIELD_FALLBACK: &str =
    "Could not perform AI analysis at this time. Please check your parameters.";
/// Text shown when the EDA perspective call fails.
pub const EDA_FALLBACK: &str = "Insights are currently unavailable.";

/// The out-of-process collaborator views depend on.
///
/// Implementations block; the controller runs them on a worker thread.
pub trait InsightSource: Send + Sync {
    /// Yield commentary for the predictor form.
    fn yield_insight(&self, form: &PredictionForm) -> String;
    /// Three quick insights about the dataset.
    fn eda_perspective(&self, records: &[CropRecord]) -> String;
}

/// [`InsightSource`] backed by the Generative Language REST API.
#[derive(Clone, Debug)]
pub struct GeminiInsights {
    settings: InsightSettings,
}

impl GeminiInsights {
    pub fn new(settings: InsightSettings) -> Self {
        Self { settings }
    }
}

impl InsightSource for GeminiInsights {
    fn yield_insight(&self, form: &PredictionForm) -> String {
        request_insight(&self.settings, form)
    }

    fn eda_perspective(&self, records: &[CropRecord]) -> String {
        request_eda_perspective(&self.settings, records)
    }
}

/// Ask for yield commentary, reading the API key from the environment.
pub fn request_insight(settings: &InsightSettings, form: &PredictionForm) -> String {
    let key = credential::resolve_api_key(&settings.api_key_env);
    request_insight_with_key(settings, key.as_deref(), form)
}

/// Ask for yield commentary with an explicit API key.
pub fn request_insight_with_key(
    settings: &InsightSettings,
    api_key: Option<&str>,
    form: &PredictionForm,
) -> String {
    let result = api::generate(
        settings,
        api_key,
        &prompt::yield_prompt(form),
        Some(GenerationConfig::from(settings)),
    );
    text_or_fallback(result, YIELD_FALLBACK, "yield analysis")
}

/// Ask for an EDA perspective, reading the API key from the environment.
pub fn request_eda_perspective(settings: &InsightSettings, records: &[CropRecord]) -> String {
    let key = credential::resolve_api_key(&settings.api_key_env);
    request_eda_perspective_with_key(settings, key.as_deref(), records)
}

/// Ask for an EDA perspective with an explicit API key.
pub fn request_eda_perspective_with_key(
    settings: &InsightSettings,
    api_key: Option<&str>,
    records: &[CropRecord],
) -> String {
    let result = api::generate(settings, api_key, &prompt::eda_prompt(records), None);
    text_or_fallback(result, EDA_FALLBACK, "EDA perspective")
}

fn text_or_fallback(result: Result<String, InsightError>, fallback: &str, what: &str) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Insight request for {what} failed: {err}");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{http_response, serve_once};

    fn settings_for(base_url: String) -> InsightSettings {
        InsightSettings {
            base_url,
            ..InsightSettings::default()
        }
    }

    #[test]
    fn missing_key_returns_fallback() {
        let settings = settings_for("http://127.0.0.1:9".to_string());
        assert_eq!(
            request_insight_with_key(&settings, None, &PredictionForm::default()),
            YIELD_FALLBACK
        );
        assert_eq!(
            request_eda_perspective_with_key(&settings, None, &[]),
            EDA_FALLBACK
        );
    }

    #[test]
    fn unreachable_endpoint_returns_fallback() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let settings = settings_for(format!("http://{addr}"));

        let text = request_insight_with_key(&settings, Some("k"), &PredictionForm::default());

        assert_eq!(text, YIELD_FALLBACK);
    }

    #[test]
    fn malformed_reply_returns_fallback() {
        let (base_url, _) = serve_once(http_response("200 OK", "not json"));
        let text = request_insight_with_key(
            &settings_for(base_url),
            Some("k"),
            &PredictionForm::default(),
        );
        assert_eq!(text, YIELD_FALLBACK);
    }

    #[test]
    fn successful_reply_passes_text_through() {
        let reply = r#"{ "candidates": [ { "content": { "parts": [ { "text": "Medium potential." } ] } } ] }"#;
        let (base_url, request_rx) = serve_once(http_response("200 OK", reply));

        let text = request_insight_with_key(
            &settings_for(base_url),
            Some("k"),
            &PredictionForm::default(),
        );

        assert_eq!(text, "Medium potential.");
        let request = request_rx.recv().unwrap();
        assert!(request.contains("Agricultural Data Scientist"));
        assert!(request.contains(r#""temperature":0.7"#));
    }
}
