//! Backend seam for the generation service.

use async_trait::async_trait;

use crate::{error::Result, prompt::PromptRequest};

/// A text-generation service that honours a structural output schema.
///
/// Implementations: [`super::GeminiBackend`] (HTTPS). Tests supply their own.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send one request and return the raw reply text, unparsed.
    async fn complete(&self, request: &PromptRequest) -> Result<String>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
