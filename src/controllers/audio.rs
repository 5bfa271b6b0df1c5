use axum::{extract::State, Json};
use std::sync::Arc;
use uuid::Uuid;

use super::extract::{ApiJson, ApiPath};
use crate::{
    domain::episode::{
        DeleteEpisodeResponse, Episode, EpisodeService, EpisodeServiceApi, GenerateEpisodeRequest,
    },
    error::AppResult,
};

pub struct AudioController {
    episode_service: Arc<EpisodeService>,
}

impl AudioController {
    pub fn new(episode_service: Arc<EpisodeService>) -> Self {
        Self { episode_service }
    }

    /// POST /api/audio/generate - Generate a podcast episode from flashcards
    pub async fn generate(
        State(controller): State<Arc<AudioController>>,
        ApiJson(request): ApiJson<GenerateEpisodeRequest>,
    ) -> AppResult<Json<Episode>> {
        let episode = controller.episode_service.generate_episode(request).await?;
        Ok(Json(episode))
    }

    /// GET /api/audio/episodes - List episodes, newest first
    pub async fn list_episodes(
        State(controller): State<Arc<AudioController>>,
    ) -> AppResult<Json<Vec<Episode>>> {
        let episodes = controller.episode_service.list_episodes().await?;
        Ok(Json(episodes))
    }

    /// GET /api/audio/episodes/{id}
    pub async fn get_episode(
        State(controller): State<Arc<AudioController>>,
        ApiPath(episode_id): ApiPath<Uuid>,
    ) -> AppResult<Json<Episode>> {
        let episode = controller.episode_service.get_episode(episode_id).await?;
        Ok(Json(episode))
    }

    /// DELETE /api/audio/episodes/{id} - Delete the record and its audio
    pub async fn delete_episode(
        State(controller): State<Arc<AudioController>>,
        ApiPath(episode_id): ApiPath<Uuid>,
    ) -> AppResult<Json<DeleteEpisodeResponse>> {
        controller.episode_service.delete_episode(episode_id).await?;
        Ok(Json(DeleteEpisodeResponse { deleted: true }))
    }
}
