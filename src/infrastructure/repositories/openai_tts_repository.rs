use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::voice::Voice;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice as OpenAiVoice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    /// Call OpenAI TTS API to synthesize a single text batch
    async fn call_openai(&self, text: &str, voice: OpenAiVoice) -> Result<Vec<u8>, String> {
        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice,
            response_format: None, // Defaults to MP3
            speed: None,
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

/// Map a catalog voice name onto the SDK enum
pub fn parse_voice(voice: &Voice) -> Result<OpenAiVoice, String> {
    match voice.as_str().to_lowercase().as_str() {
        "alloy" => Ok(OpenAiVoice::Alloy),
        "echo" => Ok(OpenAiVoice::Echo),
        "fable" => Ok(OpenAiVoice::Fable),
        "onyx" => Ok(OpenAiVoice::Onyx),
        "nova" => Ok(OpenAiVoice::Nova),
        "shimmer" => Ok(OpenAiVoice::Shimmer),
        other => Err(format!("Unsupported OpenAI voice: {}", other)),
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let sdk_voice = parse_voice(voice)?;

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut audio_data = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let chunk = self.call_openai(batch, sdk_voice.clone()).await?;
            audio_data.extend(chunk);

            tracing::debug!(
                batch_index = index,
                total_audio_size = audio_data.len(),
                "Batch synthesized and merged"
            );
        }

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
