//! REST client for the Generative Language `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::InsightSettings;
use crate::http_client;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Sampling options sent with a request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
}

impl From<&InsightSettings> for GenerationConfig {
    fn from(settings: &InsightSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("No API key configured")]
    MissingCredential,
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("API key rejected: {0}")]
    Unauthorized(String),
    #[error("Rate limited; try again later")]
    RateLimited,
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Prompt blocked: {0}")]
    Blocked(String),
    #[error("Response contained no text")]
    EmptyResponse,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponseWire {
    #[serde(default)]
    candidates: Vec<CandidateWire>,
    prompt_feedback: Option<PromptFeedbackWire>,
    error: Option<ApiErrorWire>,
}

#[derive(Debug, Deserialize)]
struct CandidateWire {
    content: Option<ContentWire>,
}

#[derive(Debug, Deserialize)]
struct ContentWire {
    #[serde(default)]
    parts: Vec<PartWire>,
}

#[derive(Debug, Deserialize)]
struct PartWire {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedbackWire {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorWire {
    message: Option<String>,
    status: Option<String>,
}

/// Build `{base_url}/v1beta/models/{model}:generateContent`.
pub fn endpoint_url(base_url: &str, model: &str) -> Result<url::Url, InsightError> {
    let invalid = |reason: String| InsightError::InvalidEndpoint {
        url: base_url.to_string(),
        reason,
    };
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let model = model.trim();
    if model.is_empty() || model.contains('/') {
        return Err(invalid(format!("unusable model name {model:?}")));
    }
    url::Url::parse(&base)
        .and_then(|root| root.join(&format!("v1beta/models/{model}:generateContent")))
        .map_err(|err| invalid(err.to_string()))
}

/// Send one prompt and return the generated text. A single attempt.
pub fn generate(
    settings: &InsightSettings,
    api_key: Option<&str>,
    prompt: &str,
    config: Option<GenerationConfig>,
) -> Result<String, InsightError> {
    let api_key = api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(InsightError::MissingCredential)?;
    let url = endpoint_url(&settings.base_url, &settings.model)?;
    let request = GenerateRequest {
        contents: [Content {
            parts: [Part { text: prompt }],
        }],
        generation_config: config,
    };

    let response = match http_client::agent()
        .post(url.as_str())
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .set(API_KEY_HEADER, api_key)
        .send_json(&request)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_body_limited(response, MAX_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            return Err(map_status_error(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(InsightError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_body_limited(response, MAX_RESPONSE_BYTES)
        .map_err(|err| InsightError::Transport(err.to_string()))?;
    parse_generate_response(&body)
}

fn map_status_error(code: u16, body: &str) -> InsightError {
    let message = api_error_message(body).unwrap_or_else(|| body.trim().to_string());
    match code {
        401 | 403 => InsightError::Unauthorized(message),
        429 => InsightError::RateLimited,
        _ => InsightError::Status { code, message },
    }
}

fn api_error_message(body: &str) -> Option<String> {
    let parsed: GenerateResponseWire = serde_json::from_str(body.trim()).ok()?;
    let error = parsed.error?;
    match (error.status, error.message) {
        (Some(status), Some(message)) => Some(format!("{status}: {message}")),
        (None, Some(message)) => Some(message),
        (Some(status), None) => Some(status),
        (None, None) => None,
    }
}

/// Concatenate the text parts of the first candidate.
pub(crate) fn parse_generate_response(body: &str) -> Result<String, InsightError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(InsightError::Json("Empty response body".to_string()));
    }
    let parsed: GenerateResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| InsightError::Json(format!("{err}: {trimmed}")))?;

    if let Some(error) = parsed.error {
        return Err(InsightError::Status {
            code: 200,
            message: error.message.unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    if let Some(reason) = parsed
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(InsightError::Blocked(reason));
    }
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(InsightError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{http_response, serve_once};

    fn settings_for(base_url: String) -> InsightSettings {
        InsightSettings {
            base_url,
            model: "test-model".to_string(),
            ..InsightSettings::default()
        }
    }

    #[test]
    fn endpoint_joins_model_path() {
        let url = endpoint_url("https://example.test", "gemini-x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
        let nested = endpoint_url("http://proxy.test/ai", "m").unwrap();
        assert_eq!(
            nested.as_str(),
            "http://proxy.test/ai/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn endpoint_rejects_bad_input() {
        assert!(matches!(
            endpoint_url("not a url", "m"),
            Err(InsightError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            endpoint_url("https://example.test", " "),
            Err(InsightError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let body = r#"{ "candidates": [
            { "content": { "parts": [ { "text": "High yield. " }, { "text": "Add potash." } ] } },
            { "content": { "parts": [ { "text": "ignored" } ] } }
        ] }"#;
        assert_eq!(
            parse_generate_response(body).unwrap(),
            "High yield. Add potash."
        );
    }

    #[test]
    fn empty_candidates_are_an_error() {
        assert!(matches!(
            parse_generate_response(r#"{ "candidates": [] }"#),
            Err(InsightError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generate_response(r#"{ "candidates": [ { "finishReason": "SAFETY" } ] }"#),
            Err(InsightError::EmptyResponse)
        ));
    }

    #[test]
    fn reports_block_reason_and_malformed_json() {
        assert!(matches!(
            parse_generate_response(r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#),
            Err(InsightError::Blocked(reason)) if reason == "SAFETY"
        ));
        assert!(matches!(
            parse_generate_response("<html>"),
            Err(InsightError::Json(_))
        ));
        assert!(matches!(
            parse_generate_response("  "),
            Err(InsightError::Json(_))
        ));
    }

    #[test]
    fn maps_status_codes() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" } }"#;
        assert!(matches!(
            map_status_error(400, body),
            InsightError::Status { code: 400, message } if message == "INVALID_ARGUMENT: API key not valid"
        ));
        assert!(matches!(
            map_status_error(403, "denied"),
            InsightError::Unauthorized(message) if message == "denied"
        ));
        assert!(matches!(map_status_error(429, ""), InsightError::RateLimited));
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let settings = settings_for("http://127.0.0.1:9".to_string());
        assert!(matches!(
            generate(&settings, None, "hi", None),
            Err(InsightError::MissingCredential)
        ));
        assert!(matches!(
            generate(&settings, Some("   "), "hi", None),
            Err(InsightError::MissingCredential)
        ));
    }

    #[test]
    fn posts_prompt_with_key_and_sampling_options() {
        let reply = r#"{ "candidates": [ { "content": { "parts": [ { "text": "Looks good" } ] } } ] }"#;
        let (base_url, request_rx) = serve_once(http_response("200 OK", reply));
        let settings = settings_for(base_url);

        let text = generate(
            &settings,
            Some("secret-key"),
            "How is my rice?",
            Some(GenerationConfig {
                temperature: 0.5,
                top_p: 0.25,
            }),
        )
        .unwrap();

        assert_eq!(text, "Looks good");
        let request = request_rx.recv().unwrap();
        assert!(request.starts_with("POST /v1beta/models/test-model:generateContent"));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: secret-key"));
        assert!(request.contains(r#""text":"How is my rice?""#));
        assert!(request.contains(r#""generationConfig":{"temperature":0.5,"topP":0.25}"#));
    }

    #[test]
    fn omits_generation_config_when_absent() {
        let reply = r#"{ "candidates": [ { "content": { "parts": [ { "text": "ok" } ] } } ] }"#;
        let (base_url, request_rx) = serve_once(http_response("200 OK", reply));

        generate(&settings_for(base_url), Some("k"), "p", None).unwrap();

        assert!(!request_rx.recv().unwrap().contains("generationConfig"));
    }

    #[test]
    fn server_errors_surface_as_status() {
        let reply = r#"{ "error": { "message": "overloaded" } }"#;
        let (base_url, _) = serve_once(http_response("503 Service Unavailable", reply));

        let err = generate(&settings_for(base_url), Some("k"), "p", None).unwrap_err();

        assert!(matches!(err, InsightError::Status { code: 503, message } if message == "overloaded"));
    }
}
