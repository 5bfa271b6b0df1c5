use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub word: String,
    pub meaning: String,
    /// 1-10
    pub difficulty: u8,
}

/// One generated immersion feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmersionItem {
    pub id: Uuid,
    pub content_type: String,
    pub text: String,
    pub translation: String,
    pub vocabulary: Vec<VocabItem>,
    pub audio_text: String,
    pub audio_url: Option<String>,
    pub topic: String,
    pub difficulty_level: u8,
    pub language: String,
    pub region: Option<String>,
    pub has_profanity: bool,
    pub created_at: DateTime<Utc>,
}

/// Shape the text generator is asked to return for an immersion item
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedContent {
    pub text: String,
    pub translation: String,
    pub vocabulary: Vec<VocabItem>,
    pub audio_text: String,
    #[serde(default)]
    pub has_profanity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTranslation {
    pub word: String,
    pub translation: String,
    pub part_of_speech: String,
    pub example: String,
}
