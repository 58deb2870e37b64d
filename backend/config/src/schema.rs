use std::collections::HashMap;
use std::path::PathBuf;

use crate::GEMINI_MODEL;

/// Caderno runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct CadernoConfig {
    /// Gemini API key. Absence is a fatal pre-flight error for both front
    /// ends; no network call is ever attempted without it.
    pub api_key: Option<String>,
    /// Vision model name.
    pub model: String,
    /// Directory where output documents land by default.
    pub documents_dir: PathBuf,
    /// Directory for the timestamp-named diagnostic log file.
    pub log_dir: PathBuf,
    /// Log level for the console layer.
    pub log_level: String,
}

impl CadernoConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    ///
    /// Empty values are treated as unset. `GEMINI_API_KEY` wins over the
    /// legacy `GOOGLE_API_KEY` name; both are honored.
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        let get = |key: &str| env.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("GOOGLE_API_KEY")),
            model: get("CADERNO_MODEL").unwrap_or_else(|| GEMINI_MODEL.to_string()),
            documents_dir: get("CADERNO_DOCUMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_documents_dir),
            log_dir: get("CADERNO_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./.logs")),
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Default destination for a document named `name` (no extension).
    pub fn destination_for(&self, name: &str) -> PathBuf {
        self.documents_dir.join(format!("{name}.docx"))
    }
}

fn default_documents_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn gemini_key_wins_over_google_key() {
        let cfg = CadernoConfig::from_env_map(&env(&[
            ("GEMINI_API_KEY", "gk"),
            ("GOOGLE_API_KEY", "legacy"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("gk"));
    }

    #[test]
    fn falls_back_to_google_key() {
        let cfg = CadernoConfig::from_env_map(&env(&[("GOOGLE_API_KEY", "legacy")]));
        assert_eq!(cfg.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn empty_key_is_treated_as_unset() {
        let cfg = CadernoConfig::from_env_map(&env(&[("GEMINI_API_KEY", "")]));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn model_default_applies() {
        let cfg = CadernoConfig::from_env_map(&HashMap::new());
        assert_eq!(cfg.model, GEMINI_MODEL);
    }

    #[test]
    fn destination_for_appends_docx() {
        let cfg = CadernoConfig::from_env_map(&env(&[("CADERNO_DOCUMENTS_DIR", "/tmp/docs")]));
        assert_eq!(
            cfg.destination_for("page-1"),
            PathBuf::from("/tmp/docs/page-1.docx")
        );
    }
}
