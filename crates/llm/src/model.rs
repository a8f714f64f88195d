use async_trait::async_trait;

use crate::error::LlmError;

/// One piece of a multimodal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineImage { mime_type: String, data: Vec<u8> },
}

/// A generative model that answers a prompt with text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send `parts` as a single user turn and return the reply text.
    async fn generate(&self, parts: &[Part]) -> Result<String, LlmError>;
}
