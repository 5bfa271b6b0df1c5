use super::text_generation_repository::{TextGenerationError, TextGenerationRepository};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Claude text generation over the Anthropic Messages API
pub struct AnthropicTextRepository {
    api_key: Option<String>,
    model: String,
    http_client: reqwest::Client,
}

impl AnthropicTextRepository {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            api_key,
            model,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerationRepository for AnthropicTextRepository {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, TextGenerationError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            TextGenerationError::MissingCredential("ANTHROPIC_API_KEY is not set".to_string())
        })?;

        let start_time = std::time::Instant::now();
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            system: system_prompt,
            messages: vec![Message {
                role: "user",
                content: user_prompt,
            }],
        };

        let response = self
            .http_client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextGenerationError::Service(format!("Anthropic request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                model = %self.model,
                "Anthropic API returned an error"
            );
            return Err(TextGenerationError::Service(format!(
                "Anthropic API error ({}): {}",
                status, error_text
            )));
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            TextGenerationError::Service(format!("Failed to parse Anthropic response: {}", e))
        })?;

        let text = body
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                TextGenerationError::Service("Anthropic response contained no text".to_string())
            })?;

        tracing::info!(
            provider = "anthropic",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            output_length = text.len(),
            "Text generation completed"
        );

        Ok(text)
    }
}
