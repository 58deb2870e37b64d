//! `.docx` serialization for caderno.
//!
//! Implements the `DocumentSink` port: one paragraph per line of extracted
//! text and nothing else (no metadata, no embedded images).

use docx_rust::document::Paragraph;
use docx_rust::Docx;
use tracing::{error, info};

use caderno_core::{CadernoError, DocumentSink, DocumentSpec};

/// Writes `DocumentSpec`s as Word documents.
pub struct DocxSink;

impl DocxSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for DocxSink {
    fn write(&self, spec: &DocumentSpec) -> Result<(), CadernoError> {
        let mut docx = Docx::default();
        for line in &spec.paragraphs {
            // Empty lines stay as empty paragraphs.
            let para = if line.is_empty() {
                Paragraph::default()
            } else {
                Paragraph::default().push_text(line.as_str())
            };
            docx.document.push(para);
        }

        // Overwrites any existing file at the destination.
        docx.write_file(&spec.destination).map_err(|e| {
            error!(
                destination = %spec.destination.display(),
                error = %e,
                "Failed to save document"
            );
            CadernoError::Write(e.to_string())
        })?;

        info!(
            destination = %spec.destination.display(),
            paragraphs = spec.paragraphs.len(),
            "Document saved"
        );
        Ok(())
    }
}
