//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from model calls and reply handling.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no candidates returned")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("reply does not match the cases shape: {0}")]
    UnexpectedShape(String),
    #[error("prompt template {path}: {reason}")]
    Prompt { path: String, reason: String },
}
