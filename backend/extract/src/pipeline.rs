//! Orchestrates one extraction: MIME sniff, remote transcription, document
//! write. Every exit path yields a classified [`ExtractionOutcome`]; the
//! front ends never see a raw error bubble up.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use caderno_core::{
    CadernoError, DocumentSink, DocumentSpec, ExtractionOutcome, ExtractionRequest,
    TranscriptionService,
};
use media::sniff_mime;

/// Sniffer → client → writer orchestration behind injected ports.
pub struct ExtractionPipeline {
    service: Arc<dyn TranscriptionService>,
    sink: Arc<dyn DocumentSink>,
}

impl ExtractionPipeline {
    pub fn new(service: Arc<dyn TranscriptionService>, sink: Arc<dyn DocumentSink>) -> Self {
        Self { service, sink }
    }

    /// Run one extraction and classify the result.
    ///
    /// The writer is only invoked for a non-empty trimmed transcription; a
    /// blocked or failed request never produces a document.
    pub async fn run(
        &self,
        request: &ExtractionRequest,
        title: &str,
        destination: &Path,
    ) -> ExtractionOutcome {
        let mime_type = match sniff_mime(&request.image_path) {
            Ok(m) => m,
            Err(e) => return ExtractionOutcome::Failed(e),
        };

        let image = match std::fs::read(&request.image_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ExtractionOutcome::Failed(CadernoError::ImageNotFound(
                    request.image_path.clone(),
                ));
            }
            Err(e) => {
                return ExtractionOutcome::Failed(CadernoError::ImageUnreadable(e.to_string()))
            }
        };

        info!(
            image = %request.image_path.display(),
            mime = mime_type,
            "Extracting text from image"
        );

        let text = match self
            .service
            .transcribe(&image, mime_type, &request.prompt, &request.params)
            .await
        {
            Ok(text) => text,
            Err(e) => return ExtractionOutcome::Failed(e),
        };

        let text = text.trim();
        if text.is_empty() {
            info!("Transcription came back empty; nothing to save");
            return ExtractionOutcome::NothingToSave;
        }

        let spec = DocumentSpec::from_text(title, destination, text);
        match self.sink.write(&spec) {
            Ok(()) => ExtractionOutcome::Saved {
                destination: spec.destination,
                paragraph_count: spec.paragraphs.len(),
            },
            Err(e) => ExtractionOutcome::Failed(e),
        }
    }
}
