//! Virtual try-on on top of a generative image model.
//!
//! Encode two uploads with [`encoder::encode`], then hand them to
//! [`TryOnClient::generate_try_on`] and render the [`GenerationOutcome`].

pub mod config;
pub mod encoder;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod tryon;

pub use config::TryOnConfig;
pub use encoder::{encode, ImageSource, InMemoryFile, LocalFile, MAX_IMAGE_BYTES};
pub use error::{Result, TryOnError};
pub use gemini::{GeminiClient, GenerateContent};
pub use models::*;
pub use tryon::TryOnClient;
