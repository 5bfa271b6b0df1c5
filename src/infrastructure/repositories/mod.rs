pub mod anthropic_text_repository;
pub mod episode_repository;
pub mod immersion_repository;
pub mod json_store;
pub mod openai_text_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod text_batches;
pub mod text_generation_repository;
pub mod tts_repository;

pub use anthropic_text_repository::AnthropicTextRepository;
pub use episode_repository::{EpisodeRepository, EPISODES_FILE};
pub use immersion_repository::{ImmersionRepository, IMMERSION_FILE};
pub use json_store::{JsonFileStore, StoreError};
pub use openai_text_repository::OpenAiTextRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use text_batches::split_into_batches;
pub use text_generation_repository::{TextGenerationError, TextGenerationRepository};
pub use tts_repository::TtsRepository;
