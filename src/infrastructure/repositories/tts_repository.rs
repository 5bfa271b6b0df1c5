use crate::domain::voice::Voice;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, OpenAI, ...)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single MP3 stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the given provider voice
    ///
    /// Returns MP3 audio ready for playback.
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, String>;
}
