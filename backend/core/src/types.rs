use std::path::PathBuf;

use serde::Serialize;

use crate::error::CadernoError;

/// Sampling parameters forwarded to the vision model. Serializes in the
/// wire casing the `generationConfig` request field expects.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 2048,
        }
    }
}

/// One transcription request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub image_path: PathBuf,
    pub prompt: String,
    pub params: GenerationParams,
}

impl ExtractionRequest {
    pub fn new(image_path: impl Into<PathBuf>, prompt: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            prompt: prompt.into(),
            params: GenerationParams::default(),
        }
    }
}

/// What the document writer is asked to serialize.
///
/// The title is carried for display purposes only; the output document body
/// contains nothing but the paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub title: String,
    pub destination: PathBuf,
    /// One entry per line of extracted text; empty lines stay as empty paragraphs.
    pub paragraphs: Vec<String>,
}

impl DocumentSpec {
    /// Split extracted text into paragraphs, one per `'\n'`-delimited line.
    pub fn from_text(
        title: impl Into<String>,
        destination: impl Into<PathBuf>,
        text: &str,
    ) -> Self {
        Self {
            title: title.into(),
            destination: destination.into(),
            paragraphs: text.split('\n').map(str::to_owned).collect(),
        }
    }
}

/// Classified result of one pipeline run.
///
/// Every exit path maps to exactly one of these; nothing escapes the
/// pipeline as an unhandled fault.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Saved {
        destination: PathBuf,
        paragraph_count: usize,
    },
    /// The model answered, but the trimmed transcription was empty.
    NothingToSave,
    Failed(CadernoError),
}
