//! `caderno-config`: process-wide configuration for the caderno tools.
//!
//! Everything the front ends need at startup is resolved here, once, into an
//! explicit [`CadernoConfig`] value that gets passed down. No module-level
//! shared state.

pub mod schema;

pub use schema::CadernoConfig;

use chrono::{DateTime, Local};

/// Timestamp format shared by default filenames, document titles, and the
/// diagnostic log file name.
pub const FORMAT_DATE_TIME: &str = "%Y-%m-%d_%H:%M:%S";

/// Vision model used when `CADERNO_MODEL` is not set.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default transcription instruction for both front ends.
pub const DEFAULT_PROMPT: &str =
    "Extract all handwritten text visible in this image. Transcribe it as faithfully as possible.";

/// Default document title for a run started at `now`.
pub fn default_title(now: DateTime<Local>) -> String {
    format!("Document created on {}", now.format(FORMAT_DATE_TIME))
}

/// Timestamp string used for default file names.
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format(FORMAT_DATE_TIME).to_string()
}
