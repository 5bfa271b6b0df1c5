pub mod error;
pub mod model;
pub mod prompts;
pub mod service;

pub use error::EpisodeServiceError;
pub use model::{Card, Episode};
pub use service::{EpisodeService, EpisodeServiceApi};

use serde::{Deserialize, Serialize};

/// Request for POST /api/audio/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateEpisodeRequest {
    pub title: String,
    pub cards: Vec<Card>,
}

/// Response for DELETE /api/audio/episodes/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteEpisodeResponse {
    pub deleted: bool,
}
