use crate::{
    config::TryOnConfig,
    error::Result,
    gemini::{self, GeminiClient, GenerateContent},
    logger,
    models::{EncodedImage, GenerationOutcome},
};
use uuid::Uuid;

/// Runs try-on attempts against an explicitly supplied model backend.
#[derive(Clone)]
pub struct TryOnClient<G = GeminiClient> {
    generator: G,
    model: String,
}

impl TryOnClient<GeminiClient> {
    pub fn from_config(config: &TryOnConfig) -> Result<Self> {
        Ok(Self::new(GeminiClient::new(config)?, config.model.clone()))
    }
}

impl<G: GenerateContent> TryOnClient<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// One attempt, one external call. Every failure comes back as
    /// `GenerationOutcome::Failed`; nothing is retried.
    pub async fn generate_try_on(
        &self,
        person: &EncodedImage,
        outfit: &EncodedImage,
        remove_background: bool,
    ) -> GenerationOutcome {
        let attempt_id = Uuid::new_v4();
        let _timer = logger::timer(&format!("try-on attempt {}", attempt_id));
        log::info!(
            "Try-on attempt {}: person {}, outfit {}, remove background: {}",
            attempt_id,
            person.media_type(),
            outfit.media_type(),
            remove_background
        );

        let request = gemini::build_request(person, outfit, remove_background);

        let outcome = match self.generator.generate_content(&self.model, &request).await {
            Ok(response) => gemini::interpret(&response),
            Err(e) => GenerationOutcome::Failed(e),
        };

        match &outcome {
            GenerationOutcome::Image(image) => log::info!(
                "Try-on attempt {} produced a {} image",
                attempt_id,
                image.media_type()
            ),
            GenerationOutcome::Failed(e) => {
                log::error!("Try-on attempt {} failed: {}", attempt_id, e)
            }
        }

        outcome
    }
}
