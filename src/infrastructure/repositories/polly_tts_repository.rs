use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::voice::Voice;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// Voices that support the neural engine (AWS Polly documentation)
const NEURAL_VOICES: &[&str] = &[
    // English
    "Joanna", "Matthew", "Ivy", "Kendra", "Kimberly", "Salli", "Joey", "Justin", "Kevin", "Amy",
    "Brian", "Emma", "Olivia",
    // Spanish
    "Lucia", "Sergio", "Mia", "Andres", "Lupe", "Pedro",
    // French
    "Lea", "Remi", "Gabrielle", "Liam",
    // German
    "Vicki", "Daniel", "Hannah",
    // Italian
    "Bianca", "Adriano",
    // Portuguese
    "Ines", "Camila", "Vitoria", "Thiago",
    // Japanese
    "Takumi", "Kazuha", "Tomoko",
    // Korean
    "Seoyeon",
    // Mandarin Chinese
    "Zhiyu",
    // Arabic
    "Hala", "Zayd",
];

/// Check if a voice supports the neural engine
pub fn is_voice_neural_compatible(voice: &str) -> bool {
    NEURAL_VOICES.contains(&voice)
}

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice.as_str());
        let engine = if is_voice_neural_compatible(voice.as_str()) {
            Engine::Neural
        } else {
            Engine::Standard
        };

        tracing::info!(
            voice = %voice,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice = %voice,
                    engine = ?engine,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Audio stream collected successfully"
        );

        Ok(audio_bytes)
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut audio_data = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let chunk = self.call_polly(batch, voice).await?;
            audio_data.extend(chunk);

            tracing::debug!(
                batch_index = index,
                total_audio_size = audio_data.len(),
                "Batch synthesized and merged"
            );
        }

        tracing::info!(
            provider = "polly",
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
