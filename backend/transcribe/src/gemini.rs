//! Gemini `generateContent` client.
//!
//! One request per invocation, no retries. The call either yields the
//! transcription text, a content-safety block, or a wrapped error; nothing
//! escapes as a panic.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use tracing::{error, info};

use caderno_core::{CadernoError, GenerationParams, TranscriptionService};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Harm categories blocked at `BLOCK_MEDIUM_AND_ABOVE` on every request.
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Client for one Gemini vision model.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{GEMINI_ENDPOINT}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

fn build_request_body(
    b64: &str,
    mime_type: &str,
    prompt: &str,
    params: &GenerationParams,
) -> serde_json::Value {
    let safety_settings: Vec<_> = SAFETY_CATEGORIES
        .iter()
        .map(|category| {
            serde_json::json!({ "category": category, "threshold": "BLOCK_MEDIUM_AND_ABOVE" })
        })
        .collect();

    // Part order matters to the model: text first, then the image.
    serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}],
        "generationConfig": params,
        "safetySettings": safety_settings,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Classify a decoded response.
///
/// A safety block wins over everything. Otherwise the text-bearing parts of
/// the first candidate are concatenated in order and trimmed; a response
/// with no candidates yields the empty string, which the pipeline reports
/// as "no text found".
fn extract_text(resp: GenerateContentResponse) -> Result<String, CadernoError> {
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(CadernoError::ContentBlocked(reason));
    }

    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    Ok(text.trim().to_string())
}

#[async_trait]
impl TranscriptionService for GeminiClient {
    async fn transcribe(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, CadernoError> {
        info!(
            model = %self.model,
            mime = mime_type,
            bytes = image.len(),
            "Sending image for transcription"
        );

        let b64 = STANDARD.encode(image);
        let body = build_request_body(&b64, mime_type, prompt, params);

        let resp = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gemini request failed");
                CadernoError::RemoteApi(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            error!(%status, detail = %detail, "Gemini returned an error status");
            return Err(CadernoError::RemoteApi(format!("{status}: {detail}")));
        }

        let decoded: GenerateContentResponse = resp.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode Gemini response");
            CadernoError::RemoteApi(e.to_string())
        })?;

        extract_text(decoded).map_err(|e| {
            error!(error = %e, "Transcription rejected");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn block_reason_wins() {
        let resp = decode(
            r#"{
                "promptFeedback": { "blockReason": "SAFETY" },
                "candidates": [{ "content": { "parts": [{ "text": "ignored" }] } }]
            }"#,
        );
        let err = extract_text(resp).unwrap_err();
        assert!(matches!(err, CadernoError::ContentBlocked(r) if r == "SAFETY"));
    }

    #[test]
    fn concatenates_parts_in_order_and_trims() {
        let resp = decode(
            r#"{
                "candidates": [{ "content": { "parts": [
                    { "text": "Line one\n" },
                    { "inlineData": { "mimeType": "image/png", "data": "" } },
                    { "text": "Line two  " }
                ] } }]
            }"#,
        );
        assert_eq!(extract_text(resp).unwrap(), "Line one\nLine two");
    }

    #[test]
    fn no_candidates_is_empty_text() {
        let resp = decode(r#"{ "candidates": [] }"#);
        assert_eq!(extract_text(resp).unwrap(), "");
    }

    #[test]
    fn candidate_without_content_is_empty_text() {
        let resp = decode(r#"{ "candidates": [{}] }"#);
        assert_eq!(extract_text(resp).unwrap(), "");
    }

    #[test]
    fn request_body_orders_text_before_image() {
        let params = GenerationParams::default();
        let body = build_request_body("QUJD", "image/png", "Extract all text", &params);
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "Extract all text");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn generation_config_serializes_params_in_wire_casing() {
        let params = GenerationParams::default();
        let body = build_request_body("QUJD", "image/png", "p", &params);
        let config = &body["generationConfig"];
        assert_eq!(config["topK"], 32);
        assert_eq!(config["maxOutputTokens"], 2048);
        assert!(config["temperature"].is_number());
        assert!(config["topP"].is_number());
    }
}
