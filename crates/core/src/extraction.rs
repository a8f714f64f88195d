use serde::{Deserialize, Serialize};

/// One case entry found by the extraction model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedCase {
    pub case_no: String,
    pub source: Option<String>,
}

/// Documented reply shape: `{"cases": [{"case_no": ..., "source": ...}]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtractedCases {
    pub cases: Vec<ExtractedCase>,
}

/// Text extraction request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextIn {
    pub text: String,
}
