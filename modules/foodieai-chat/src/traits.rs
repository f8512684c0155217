//! Seam to the generation service.

use anyhow::Result;
use async_trait::async_trait;

use gemini_client::GeminiClient;

/// One-shot text generation against an interchangeable model identifier.
///
/// Implemented by `GeminiClient` and by scripted fakes in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        message: &str,
    ) -> Result<String>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        message: &str,
    ) -> Result<String> {
        Ok(self
            .generate_content(model, system_instruction, message)
            .await?)
    }
}
