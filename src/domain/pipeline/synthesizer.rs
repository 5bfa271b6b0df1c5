use super::error::PipelineError;
use crate::domain::voice::Voice;
use crate::infrastructure::repositories::TtsRepository;
use std::path::Path;
use std::sync::Arc;

/// One TTS call per piece of text
pub struct SegmentSynthesizer {
    tts_repo: Arc<dyn TtsRepository>,
}

impl SegmentSynthesizer {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    /// Synthesize `text` and return the audio bytes
    pub async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyText);
        }

        self.tts_repo
            .synthesize(text, voice)
            .await
            .map_err(PipelineError::Collaborator)
    }

    /// Synthesize `text` into `destination`, returning the number of bytes written
    pub async fn synthesize_to(
        &self,
        text: &str,
        voice: &Voice,
        destination: &Path,
    ) -> Result<u64, PipelineError> {
        let audio = self.synthesize(text, voice).await?;

        tokio::fs::write(destination, &audio)
            .await
            .map_err(|e| PipelineError::io(destination, e))?;

        Ok(audio.len() as u64)
    }
}
