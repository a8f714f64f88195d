//! Versioned prompt templates for the extraction calls.
//!
//! Built-in templates live in `prompts/` next to this crate's manifest and are
//! embedded at compile time. A deployment may override either file by pointing
//! [`PromptSet::from_dir`] at a directory holding files with the same names.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LlmError;

/// File name of the text-extraction template.
pub const TEXT_PROMPT_FILE: &str = "text_extraction.v1.txt";
/// File name of the image-extraction template.
pub const IMAGE_PROMPT_FILE: &str = "image_extraction.v1.txt";
/// Placeholder in the text template that receives the user's text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

const BUILTIN_TEXT: &str = include_str!("../prompts/text_extraction.v1.txt");
const BUILTIN_IMAGE: &str = include_str!("../prompts/image_extraction.v1.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    text: String,
    image: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptSet {
    #[must_use]
    pub fn builtin() -> Self {
        Self { text: BUILTIN_TEXT.to_owned(), image: BUILTIN_IMAGE.to_owned() }
    }

    /// Build a set from explicit template bodies.
    ///
    /// # Errors
    /// Fails if the text template lacks the `{text}` placeholder.
    pub fn new(text: String, image: String) -> Result<Self, LlmError> {
        if !text.contains(TEXT_PLACEHOLDER) {
            return Err(LlmError::Prompt {
                path: TEXT_PROMPT_FILE.to_owned(),
                reason: format!("missing {TEXT_PLACEHOLDER} placeholder"),
            });
        }
        Ok(Self { text, image })
    }

    /// Load templates from `dir`. A file that does not exist falls back to the
    /// built-in template of the same name.
    ///
    /// # Errors
    /// Fails on unreadable files or a text template without a placeholder.
    pub fn from_dir(dir: &Path) -> Result<Self, LlmError> {
        let text = read_or_builtin(dir, TEXT_PROMPT_FILE, BUILTIN_TEXT)?;
        let image = read_or_builtin(dir, IMAGE_PROMPT_FILE, BUILTIN_IMAGE)?;
        Self::new(text, image)
    }

    /// The text template with the user's text substituted in.
    #[must_use]
    pub fn render_text(&self, text: &str) -> String {
        self.text.replace(TEXT_PLACEHOLDER, text)
    }

    #[must_use]
    pub fn image_prompt(&self) -> &str {
        &self.image
    }
}

fn read_or_builtin(dir: &Path, file: &str, builtin: &str) -> Result<String, LlmError> {
    let path = dir.join(file);
    match std::fs::read_to_string(&path) {
        Ok(body) => {
            tracing::info!(path = %path.display(), "loaded prompt template override");
            Ok(body)
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no prompt override, using built-in");
            Ok(builtin.to_owned())
        },
        Err(e) => Err(LlmError::Prompt { path: path.display().to_string(), reason: e.to_string() }),
    }
}
