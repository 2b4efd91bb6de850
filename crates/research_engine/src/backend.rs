use std::time::Duration;

use hub_logging::{hub_debug, hub_warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{UpstreamError, UpstreamKind};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the generative backend.
///
/// No request timeout is applied unless one is set; the backend's own limits
/// decide how long a call may take.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            connect_timeout: Some(Duration::from_secs(10)),
            request_timeout: None,
        }
    }
}

/// One prompt for the backend, optionally constrained to a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends one request and returns the raw text of the reply.
    async fn generate(&self, request: GenerateRequest) -> Result<String, UpstreamError>;
}

/// [`GenerativeBackend`] over the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| UpstreamError::new(UpstreamKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    fn endpoint(&self) -> Result<reqwest::Url, UpstreamError> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        );
        reqwest::Url::parse(&raw)
            .map_err(|err| UpstreamError::new(UpstreamKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<String, UpstreamError> {
        let endpoint = self.endpoint()?;
        let body = GenerateContentBody::from_request(&request);
        hub_debug!(
            "generateContent model={} prompt_len={} structured={}",
            self.settings.model,
            request.prompt.len(),
            request.response_schema.is_some()
        );

        let response = self
            .client
            .post(endpoint)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| status.to_string());
            hub_warn!("generateContent failed with {}: {}", status, detail);
            return Err(UpstreamError::new(
                UpstreamKind::HttpStatus(status.as_u16()),
                detail,
            ));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| UpstreamError::new(UpstreamKind::Decode, err.to_string()))?;
        reply.into_text()
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        return UpstreamError::new(UpstreamKind::Timeout, err.to_string());
    }
    UpstreamError::new(UpstreamKind::Network, err.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

impl<'a> GenerateContentBody<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: request
                .response_schema
                .as_ref()
                .map(|schema| GenerationConfig {
                    response_mime_type: "application/json",
                    response_schema: schema,
                }),
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Result<String, UpstreamError> {
        if let Some(reason) = self.prompt_feedback.and_then(|fb| fb.block_reason) {
            return Err(UpstreamError::new(
                UpstreamKind::Blocked {
                    reason: reason.clone(),
                },
                format!("prompt blocked: {reason}"),
            ));
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(UpstreamError::new(
                UpstreamKind::EmptyResponse,
                "no candidates in reply",
            ));
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string());
            return Err(UpstreamError::new(
                UpstreamKind::EmptyResponse,
                format!("candidate has no text (finish reason {reason})"),
            ));
        }
        Ok(text)
    }
}
