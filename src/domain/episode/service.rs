use super::error::EpisodeServiceError;
use super::model::Episode;
use super::prompts::{script_user_prompt, SCRIPT_MAX_TOKENS, SCRIPT_SYSTEM_PROMPT};
use super::GenerateEpisodeRequest;
use crate::domain::pipeline::EpisodePipeline;
use crate::infrastructure::repositories::{EpisodeRepository, TextGenerationRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Episodes shorter than this are reported as this long
const MIN_DURATION_SECONDS: u64 = 30;
/// Rough MP3 bytes per second of speech
const BYTES_PER_SECOND: u64 = 2000;

pub struct EpisodeService {
    episode_repo: Arc<EpisodeRepository>,
    text_repo: Arc<dyn TextGenerationRepository>,
    pipeline: Arc<EpisodePipeline>,
    shutdown: CancellationToken,
}

impl EpisodeService {
    pub fn new(
        episode_repo: Arc<EpisodeRepository>,
        text_repo: Arc<dyn TextGenerationRepository>,
        pipeline: Arc<EpisodePipeline>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            episode_repo,
            text_repo,
            pipeline,
            shutdown,
        }
    }
}

#[async_trait]
pub trait EpisodeServiceApi: Send + Sync {
    /// Generate a podcast episode from flashcards
    ///
    /// This operation:
    /// - Validates the request before any collaborator is called
    /// - Asks the text generator for a LEARNER/EXPERT script
    /// - Runs the script through the audio pipeline
    /// - Persists the episode record
    async fn generate_episode(
        &self,
        request: GenerateEpisodeRequest,
    ) -> Result<Episode, EpisodeServiceError>;

    async fn list_episodes(&self) -> Result<Vec<Episode>, EpisodeServiceError>;

    async fn get_episode(&self, episode_id: Uuid) -> Result<Episode, EpisodeServiceError>;

    /// Remove the record and its audio file
    async fn delete_episode(&self, episode_id: Uuid) -> Result<(), EpisodeServiceError>;
}

#[async_trait]
impl EpisodeServiceApi for EpisodeService {
    async fn generate_episode(
        &self,
        request: GenerateEpisodeRequest,
    ) -> Result<Episode, EpisodeServiceError> {
        self.validate(&request)?;

        let episode_id = Uuid::new_v4();
        tracing::info!(
            episode_id = %episode_id,
            title = %request.title,
            card_count = request.cards.len(),
            "Episode generation request"
        );

        // 1. Script from the text generator
        let script = self
            .text_repo
            .generate(
                SCRIPT_SYSTEM_PROMPT,
                &script_user_prompt(&request.title, &request.cards),
                SCRIPT_MAX_TOKENS,
            )
            .await?;

        // 2. Script to audio
        let run_cancel = self.shutdown.child_token();
        let audio = self.pipeline.run(episode_id, &script, &run_cancel).await?;

        // 3. Persist; an unsaved episode must not leave its audio behind
        let episode = Episode {
            id: episode_id,
            title: request.title,
            cards: request.cards,
            script,
            audio_url: format!("/audio/{}.mp3", episode_id),
            duration_estimate: estimate_duration(audio.size_bytes),
            created_at: Utc::now(),
        };

        if let Err(e) = self.episode_repo.create(episode.clone()).await {
            if let Err(remove_err) = tokio::fs::remove_file(&audio.path).await {
                tracing::warn!(
                    episode_id = %episode_id,
                    error = %remove_err,
                    "Failed to remove audio of unsaved episode"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            episode_id = %episode_id,
            segment_count = audio.segment_count,
            duration_estimate = episode.duration_estimate,
            "Episode created"
        );

        Ok(episode)
    }

    async fn list_episodes(&self) -> Result<Vec<Episode>, EpisodeServiceError> {
        Ok(self.episode_repo.find_all().await?)
    }

    async fn get_episode(&self, episode_id: Uuid) -> Result<Episode, EpisodeServiceError> {
        self.episode_repo
            .find_by_id(episode_id)
            .await?
            .ok_or(EpisodeServiceError::NotFound)
    }

    async fn delete_episode(&self, episode_id: Uuid) -> Result<(), EpisodeServiceError> {
        if !self.episode_repo.delete(episode_id).await? {
            return Err(EpisodeServiceError::NotFound);
        }

        let audio_path = self.pipeline.output_path(episode_id);
        match tokio::fs::remove_file(&audio_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                episode_id = %episode_id,
                path = %audio_path.display(),
                error = %e,
                "Episode record deleted but audio file could not be removed"
            ),
        }

        tracing::info!(episode_id = %episode_id, "Episode deleted");
        Ok(())
    }
}

impl EpisodeService {
    fn validate(&self, request: &GenerateEpisodeRequest) -> Result<(), EpisodeServiceError> {
        if request.title.trim().is_empty() {
            return Err(EpisodeServiceError::Invalid(
                "Title cannot be empty".to_string(),
            ));
        }
        if request.cards.is_empty() {
            return Err(EpisodeServiceError::Invalid(
                "At least one card is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn estimate_duration(size_bytes: u64) -> u64 {
    (size_bytes / BYTES_PER_SECOND).max(MIN_DURATION_SECONDS)
}
