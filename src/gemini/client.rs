use crate::{
    config::TryOnConfig,
    error::{Result, TryOnError},
    models::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;

use super::GenerateContent;

/// Talks to the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &TryOnConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rtryon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TryOnError::ConfigError(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerateContent for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        log::info!("Invoking image model: {}", model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TryOnError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Model API returned {}: {}", status, body);
            return Err(TryOnError::TransportFailure(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TryOnError::TransportFailure(e.to_string()))?;
        log::debug!("Model API response: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| TryOnError::SerializationError(e.to_string()))
    }
}
