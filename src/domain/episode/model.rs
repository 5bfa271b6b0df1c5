use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

/// Persisted podcast episode. Keys stay camelCase for existing clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: Uuid,
    pub title: String,
    pub cards: Vec<Card>,
    pub script: String,
    pub audio_url: String,
    /// Seconds, estimated from the assembled file size
    pub duration_estimate: u64,
    pub created_at: DateTime<Utc>,
}
