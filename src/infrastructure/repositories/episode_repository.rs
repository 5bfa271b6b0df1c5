use super::json_store::{JsonFileStore, StoreError};
use crate::domain::episode::Episode;
use std::path::PathBuf;
use uuid::Uuid;

pub const EPISODES_FILE: &str = "episodes.json";

pub struct EpisodeRepository {
    store: JsonFileStore<Episode>,
}

impl EpisodeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    /// All episodes, newest first
    pub async fn find_all(&self) -> Result<Vec<Episode>, StoreError> {
        let mut episodes = self.store.load_all().await?;
        episodes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(episodes)
    }

    pub async fn find_by_id(&self, episode_id: Uuid) -> Result<Option<Episode>, StoreError> {
        let episodes = self.store.load_all().await?;
        Ok(episodes.into_iter().find(|e| e.id == episode_id))
    }

    pub async fn create(&self, episode: Episode) -> Result<(), StoreError> {
        self.store.update(move |episodes| episodes.push(episode)).await
    }

    /// Remove an episode record; returns false if it did not exist
    pub async fn delete(&self, episode_id: Uuid) -> Result<bool, StoreError> {
        self.store
            .update(|episodes| {
                let before = episodes.len();
                episodes.retain(|e| e.id != episode_id);
                episodes.len() < before
            })
            .await
    }
}
