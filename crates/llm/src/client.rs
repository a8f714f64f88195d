use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use case_tracker_core::{DEFAULT_MODEL, truncate};

use crate::ai_types::{Content, GenerateRequest, GenerateResponse, InlineData, WirePart};
use crate::error::LlmError;
use crate::model::{GenerativeModel, Part};

/// Client for the Gemini `generateContent` REST API.
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmClient {
    /// Creates a new client with the given API key and base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client =
            reqwest::Client::builder().build().map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url, model: DEFAULT_MODEL.to_owned() })
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

fn to_wire(part: &Part) -> WirePart {
    match part {
        Part::Text(text) => WirePart { text: Some(text.clone()), inline_data: None },
        Part::InlineImage { mime_type, data } => WirePart {
            text: None,
            inline_data: Some(InlineData { mime_type: mime_type.clone(), data: STANDARD.encode(data) }),
        },
    }
}

#[async_trait]
impl GenerativeModel for LlmClient {
    async fn generate(&self, parts: &[Part]) -> Result<String, LlmError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_owned()),
                parts: parts.iter().map(to_wire).collect(),
            }],
        };

        tracing::debug!(model = %self.model, parts = parts.len(), "sending generateContent request");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 500).to_owned(),
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!("generateContent response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}
