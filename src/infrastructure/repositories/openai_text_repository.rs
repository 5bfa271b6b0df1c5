use super::text_generation_repository::{TextGenerationError, TextGenerationRepository};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Text generation through OpenAI chat completions
pub struct OpenAiTextRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTextRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl TextGenerationRepository for OpenAiTextRepository {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, TextGenerationError> {
        let start_time = std::time::Instant::now();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .max_tokens(max_tokens)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| TextGenerationError::Service(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| TextGenerationError::Service(e.to_string()))?
                    .into(),
            ])
            .build()
            .map_err(|e| TextGenerationError::Service(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
            TextGenerationError::Service(format!("OpenAI error: {}", e))
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TextGenerationError::Service("OpenAI response contained no text".to_string())
            })?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            output_length = text.len(),
            "Text generation completed"
        );

        Ok(text)
    }
}
