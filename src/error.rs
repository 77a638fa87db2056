use thiserror::Error;

#[derive(Debug, Error)]
pub enum TryOnError {
    #[error("File is not an image (declared type '{0}'). Please select a JPG, PNG, or other image file.")]
    NotAnImage(String),
    #[error("Image size of {size} bytes exceeds the {limit} byte limit. Please upload a smaller file.")]
    TooLarge { size: u64, limit: u64 },
    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),
    #[error("Could not extract image data from file.")]
    MalformedResult,
    #[error("{0} environment variable is not set.")]
    MissingCredential(String),
    #[error("{0}")]
    TransportFailure(String),
    #[error("Model returned a text response instead of an image: {0}")]
    ModelRefused(String),
    #[error("No image data found in the model response.")]
    NoImageData,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl TryOnError {
    /// Only a missing credential stops the process; everything else ends a
    /// single attempt and the user can try again.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TryOnError::MissingCredential(_))
    }
}

pub type Result<T> = std::result::Result<T, TryOnError>;
