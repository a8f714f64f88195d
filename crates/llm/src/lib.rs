//! Generative-model gateway for case extraction.
//!
//! [`CaseExtractor`] turns free text or an uploaded image into the
//! `{"cases": [...]}` JSON shape by prompting a [`GenerativeModel`].
//! [`LlmClient`] is the production model, talking to the Gemini REST API.

mod ai_types;
mod client;
mod error;
mod extractor;
mod model;
mod prompts;

pub use client::LlmClient;
pub use error::LlmError;
pub use extractor::{CaseExtractor, ShapePolicy};
pub use model::{GenerativeModel, Part};
pub use prompts::{PromptSet, IMAGE_PROMPT_FILE, TEXT_PLACEHOLDER, TEXT_PROMPT_FILE};

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod test_support;
