use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TextGenerationError {
    /// No credential configured for the provider. Not retryable.
    #[error("missing credential: {0}")]
    MissingCredential(String),
    #[error("text generation failed: {0}")]
    Service(String),
}

/// Repository for free-form text generation (LLM completions).
#[async_trait]
pub trait TextGenerationRepository: Send + Sync {
    /// Run one completion and return the generated text
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, TextGenerationError>;
}
