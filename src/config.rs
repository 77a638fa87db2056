use crate::error::{Result, TryOnError};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Clone)]
pub struct TryOnConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

// Hand-written so the key never ends up in a log line.
impl std::fmt::Debug for TryOnConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryOnConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TryOnConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        TryOnConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the credential once at startup. A missing key is fatal: no client
    /// should be built and no call attempted.
    pub fn from_env() -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or_else(|| TryOnError::MissingCredential(API_KEY_VARS[0].to_string()))?;

        let model = env::var("TRYON_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        TryOnConfig::new(api_key)
            .with_model(model)
            .with_base_url(base_url)
            .validated()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn validated(self) -> Result<Self> {
        if self.api_key.trim().is_empty() {
            return Err(TryOnError::MissingCredential(API_KEY_VARS[0].to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(TryOnError::ConfigError("model name is empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TryOnError::ConfigError(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TryOnConfig::new("k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = TryOnConfig::new("k").with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_blank_key_is_missing_credential() {
        let err = TryOnConfig::new("  ").validated().unwrap_err();
        assert!(matches!(err, TryOnError::MissingCredential(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = TryOnConfig::new("k")
            .with_base_url("ftp://example.com")
            .validated()
            .unwrap_err();
        assert!(matches!(err, TryOnError::ConfigError(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", TryOnConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
