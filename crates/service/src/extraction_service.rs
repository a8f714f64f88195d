use case_tracker_core::{LOG_PREVIEW_CHARS, truncate};
use case_tracker_llm::CaseExtractor;
use serde_json::Value;

use crate::ServiceError;

pub struct ExtractionService {
    extractor: CaseExtractor,
}

impl ExtractionService {
    #[must_use]
    pub const fn new(extractor: CaseExtractor) -> Self {
        Self { extractor }
    }

    pub async fn extract_from_text(&self, text: &str) -> Result<Value, ServiceError> {
        let preview = truncate(text, LOG_PREVIEW_CHARS);
        tracing::info!(%preview, "received text for extraction");

        match self.extractor.extract_from_text(text).await {
            Ok(value) => {
                tracing::info!(result = %value, "extracted case data from text");
                Ok(value)
            },
            Err(e) => {
                tracing::error!(%preview, error = %e, "text extraction failed");
                Err(e.into())
            },
        }
    }

    pub async fn extract_from_image(
        &self,
        file_name: Option<&str>,
        image: Vec<u8>,
    ) -> Result<Value, ServiceError> {
        let file_name = file_name.unwrap_or("<unnamed>");
        let size = image.len();
        tracing::info!(file_name, size, "received image for extraction");

        match self.extractor.extract_from_image(image).await {
            Ok(value) => {
                tracing::info!(file_name, result = %value, "extracted case data from image");
                Ok(value)
            },
            Err(e) => {
                tracing::error!(file_name, size, error = %e, "image extraction failed");
                Err(e.into())
            },
        }
    }
}
