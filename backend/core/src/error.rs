use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the caderno extraction pipeline.
#[derive(Debug, Error)]
pub enum CadernoError {
    #[error("API credential is not configured (set GEMINI_API_KEY or GOOGLE_API_KEY)")]
    MissingCredential,

    #[error("image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("could not read image: {0}")]
    ImageUnreadable(String),

    #[error("content blocked by the API: {0}")]
    ContentBlocked(String),

    #[error("remote API error: {0}")]
    RemoteApi(String),

    #[error("failed to save document: {0}")]
    Write(String),
}

impl CadernoError {
    /// Soft outcomes are policy answers from the remote service, not
    /// technical failures; the front ends render them in a warning tone.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::ContentBlocked(_))
    }
}
