use super::image::GeneratedImage;
use crate::error::{Result, TryOnError};

pub const GENERATION_FAILURE_PREFIX: &str = "Failed to generate image.";

/// Terminal result of one try-on attempt.
#[derive(Debug)]
pub enum GenerationOutcome {
    Image(GeneratedImage),
    Failed(TryOnError),
}

impl GenerationOutcome {
    pub fn is_image(&self) -> bool {
        matches!(self, GenerationOutcome::Image(_))
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            GenerationOutcome::Image(image) => Some(image),
            GenerationOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&TryOnError> {
        match self {
            GenerationOutcome::Image(_) => None,
            GenerationOutcome::Failed(err) => Some(err),
        }
    }

    /// User-facing failure text, always carrying the generation-failure prefix.
    pub fn message(&self) -> Option<String> {
        self.error()
            .map(|err| format!("{} {}", GENERATION_FAILURE_PREFIX, err))
    }

    pub fn into_result(self) -> Result<GeneratedImage> {
        match self {
            GenerationOutcome::Image(image) => Ok(image),
            GenerationOutcome::Failed(err) => Err(err),
        }
    }
}
