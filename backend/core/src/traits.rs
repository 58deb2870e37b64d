use async_trait::async_trait;

use crate::error::CadernoError;
use crate::types::{DocumentSpec, GenerationParams};

/// Remote vision-model transcription capability.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Send one image plus a guiding prompt and return the transcription.
    ///
    /// `Ok` with an empty string is a valid answer ("the model saw no
    /// text"); the caller decides what to do with it. Implementations
    /// convert every transport, auth, and parsing failure into a
    /// `CadernoError`; nothing escapes.
    async fn transcribe(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, CadernoError>;
}

/// Document serialization capability.
pub trait DocumentSink: Send + Sync {
    /// Serialize the spec to its destination, overwriting any existing file.
    fn write(&self, spec: &DocumentSpec) -> Result<(), CadernoError>;
}
