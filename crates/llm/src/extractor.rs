use std::io::Cursor;
use std::sync::Arc;

use case_tracker_core::{ExtractedCases, strip_markdown_json, truncate};
use image::ImageFormat;
use serde_json::Value;

use crate::error::LlmError;
use crate::model::{GenerativeModel, Part};
use crate::prompts::PromptSet;

/// What to do with a reply that parses as JSON but is not `{"cases": [...]}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Return any valid JSON unchanged.
    #[default]
    PassThrough,
    /// Reject replies that do not deserialize as [`ExtractedCases`].
    Strict,
}

impl ShapePolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::PassThrough }
    }
}

/// Prompts a generative model to pull case numbers and sources out of text or images.
#[derive(Clone)]
pub struct CaseExtractor {
    model: Arc<dyn GenerativeModel>,
    prompts: PromptSet,
    shape_policy: ShapePolicy,
}

impl std::fmt::Debug for CaseExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseExtractor").field("shape_policy", &self.shape_policy).finish()
    }
}

impl CaseExtractor {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model, prompts: PromptSet::builtin(), shape_policy: ShapePolicy::default() }
    }

    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    #[must_use]
    pub fn with_shape_policy(mut self, shape_policy: ShapePolicy) -> Self {
        self.shape_policy = shape_policy;
        self
    }

    #[must_use]
    pub const fn shape_policy(&self) -> ShapePolicy {
        self.shape_policy
    }

    /// Extract cases from free-form text.
    ///
    /// # Errors
    /// Model call failure, or a reply that is not JSON after fence stripping.
    pub async fn extract_from_text(&self, text: &str) -> Result<Value, LlmError> {
        let prompt = self.prompts.render_text(text);
        let reply = self.model.generate(&[Part::Text(prompt)]).await?;
        self.parse_reply(&reply)
    }

    /// Extract cases from an uploaded image.
    ///
    /// # Errors
    /// Undecodable image, model call failure, or a reply that is not JSON.
    pub async fn extract_from_image(&self, image: Vec<u8>) -> Result<Value, LlmError> {
        let (mime_type, data) = tokio::task::spawn_blocking(move || decode_image(image))
            .await
            .map_err(|e| LlmError::InvalidImage(format!("decoder task failed: {e}")))??;
        tracing::debug!(mime_type, bytes = data.len(), "image decoded");

        let parts = [
            Part::Text(self.prompts.image_prompt().to_owned()),
            Part::InlineImage { mime_type: mime_type.to_owned(), data },
        ];
        let reply = self.model.generate(&parts).await?;
        self.parse_reply(&reply)
    }

    fn parse_reply(&self, reply: &str) -> Result<Value, LlmError> {
        let content = strip_markdown_json(reply);
        let value: Value = serde_json::from_str(content).map_err(|e| LlmError::JsonParse {
            context: format!("model reply (content: {})", truncate(content, 300)),
            source: e,
        })?;

        if self.shape_policy == ShapePolicy::Strict {
            serde_json::from_value::<ExtractedCases>(value.clone())
                .map_err(|e| LlmError::UnexpectedShape(e.to_string()))?;
        }
        Ok(value)
    }
}

/// Formats the model accepts as inline data without conversion.
const INLINE_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Decodes the upload and returns the bytes to send with their MIME type.
///
/// Formats outside [`INLINE_FORMATS`] are re-encoded as PNG.
fn decode_image(image: Vec<u8>) -> Result<(&'static str, Vec<u8>), LlmError> {
    let format = image::guess_format(&image).map_err(|e| LlmError::InvalidImage(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(&image, format)
        .map_err(|e| LlmError::InvalidImage(e.to_string()))?;
    if INLINE_FORMATS.contains(&format) {
        return Ok((format.to_mime_type(), image));
    }

    let mut png = Cursor::new(Vec::new());
    decoded
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| LlmError::InvalidImage(format!("re-encoding {format:?} as PNG: {e}")))?;
    tracing::debug!(?format, "re-encoded upload as PNG");
    Ok((ImageFormat::Png.to_mime_type(), png.into_inner()))
}
