pub mod client;
pub mod interpreter;
pub mod prompt;

use crate::{
    error::Result,
    models::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;

pub use client::GeminiClient;
pub use interpreter::{interpret, interpret_parts};
pub use prompt::{build_instruction, build_request};

/// One request, one reply. Implementations must not retry.
#[async_trait]
pub trait GenerateContent: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
