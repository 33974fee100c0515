//! Gemini `generateContent` backend over HTTPS.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use super::backend::GenerationBackend;
use crate::{
    config::GeneratorConfig,
    error::{Result, RpmError},
    prompt::PromptRequest,
};

/// Gemini REST client.
///
/// The API key is captured when the backend is built. Without one, every call
/// fails with `RpmError::MissingCredential`.
pub struct GeminiBackend {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiBackend {
    /// Create a backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| RpmError::Configuration {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of the `generateContent` method for the configured model.
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Request body for one generation call.
    pub fn request_body(request: &PromptRequest) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.schema,
                "temperature": request.temperature,
            },
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn complete(&self, request: &PromptRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(RpmError::MissingCredential)?;

        debug!("POST {} ({} prompt chars)", self.url(), request.prompt.len());
        let response = self
            .http_client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(request))
            .send()
            .await
            .map_err(|e| RpmError::transport("Failed to reach generation service", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpmError::transport("Failed to read generation response", e))?;

        if !status.is_success() {
            return Err(RpmError::Service {
                status: status.as_u16(),
                message: service_error_message(&body),
            });
        }

        extract_text(&body)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

/// Concatenate the text parts of the first candidate.
///
/// # Errors
///
/// `RpmError::MalformedResponse` if the envelope is not JSON,
/// `RpmError::EmptyResponse` if it carries no text.
pub fn extract_text(body: &str) -> Result<String> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|source| RpmError::MalformedResponse { source })?;

    let Some(candidate) = envelope.candidates.into_iter().next() else {
        return Err(RpmError::EmptyResponse);
    };
    if let Some(reason) = candidate.finish_reason.as_deref() {
        if reason != "STOP" {
            warn!("Generation finished with reason {reason}");
        }
    }

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(RpmError::EmptyResponse);
    }
    Ok(text)
}

/// Best-effort message from an error body; falls back to the raw text.
fn service_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.status {
            Some(status) => format!("{status}: {}", error.message),
            None => error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{models::FormData, prompt::DEFAULT_TEMPERATURE};

    const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

    fn backend(config: GeneratorConfig) -> GeminiBackend {
        GeminiBackend::new(&config).unwrap()
    }

    fn backend_for(server: &MockServer) -> GeminiBackend {
        backend(GeneratorConfig {
            api_key: Some("test-key".to_string()),
            endpoint: server.uri(),
            ..GeneratorConfig::default()
        })
    }

    fn default_request() -> PromptRequest {
        PromptRequest::from_form(&FormData::default(), DEFAULT_TEMPERATURE)
    }

    #[test]
    fn test_url_uses_model_and_trims_endpoint() {
        let backend = backend(GeneratorConfig {
            endpoint: "http://localhost:8080/v1beta/".to_string(),
            ..GeneratorConfig::default()
        });
        assert_eq!(
            backend.url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_carries_schema_and_temperature() {
        let request = PromptRequest::from_form(&FormData::default(), DEFAULT_TEMPERATURE);
        let body = GeminiBackend::request_body(&request);

        assert_eq!(body["contents"][0]["parts"][0]["text"], request.prompt.as_str());
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"], request.schema);
        let temperature = config["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] },
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let err = extract_text(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap_err();
        assert!(matches!(err, RpmError::EmptyResponse));
    }

    #[test]
    fn test_extract_text_blank_part() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        assert!(matches!(extract_text(body), Err(RpmError::EmptyResponse)));
    }

    #[test]
    fn test_extract_text_rejects_non_json_envelope() {
        assert!(matches!(
            extract_text("<html>bad gateway</html>"),
            Err(RpmError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_service_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid",
            "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            service_error_message(body),
            "INVALID_ARGUMENT: API key not valid"
        );
        assert_eq!(service_error_message(" upstream down \n"), "upstream down");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let backend = backend(GeneratorConfig::default());
        let request = PromptRequest::from_form(&FormData::default(), DEFAULT_TEMPERATURE);
        let err = backend.complete(&request).await.unwrap_err();
        assert!(matches!(err, RpmError::MissingCredential));
    }

    #[tokio::test]
    async fn test_complete_posts_to_model_and_unwraps_envelope() {
        let server = MockServer::start().await;
        let request = default_request();
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "{\"ok\": true}" }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = backend_for(&server).complete(&request).await.unwrap();
        assert_eq!(text, "{\"ok\": true}");

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let body: Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["generationConfig"]["responseSchema"], request.schema);
    }

    #[tokio::test]
    async fn test_complete_maps_error_body_to_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = backend_for(&server)
            .complete(&default_request())
            .await
            .unwrap_err();
        match err {
            RpmError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "INVALID_ARGUMENT: API key not valid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_without_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = backend_for(&server)
            .complete(&default_request())
            .await
            .unwrap_err();
        assert!(matches!(err, RpmError::EmptyResponse));
        assert!(err.is_generation_failure());
    }
}
