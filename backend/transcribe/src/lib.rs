//! Remote transcription client for caderno.
//!
//! Implements the `TranscriptionService` port against the Gemini
//! `generateContent` endpoint.

pub mod gemini;

pub use gemini::GeminiClient;
