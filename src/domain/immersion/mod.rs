pub mod error;
pub mod model;
pub mod prompts;
pub mod response;
pub mod service;

pub use error::ImmersionServiceError;
pub use model::{GeneratedContent, ImmersionItem, VocabItem, WordTranslation};
pub use prompts::ContentType;
pub use response::decode_json_response;
pub use service::{ImmersionService, ImmersionServiceApi, MAX_BATCH_SIZE};

use serde::{Deserialize, Serialize};

/// Request for POST /api/immersion/generate and /api/immersion/generate-batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateImmersionRequest {
    pub topic: String,
    pub difficulty_level: i32,
    pub content_type: String,
    pub language: String,
    pub region: Option<String>,
}

impl Default for GenerateImmersionRequest {
    fn default() -> Self {
        Self {
            topic: "daily life".to_string(),
            difficulty_level: 5,
            content_type: "dialogue".to_string(),
            language: "es".to_string(),
            region: None,
        }
    }
}

/// Request for POST /api/immersion/translate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub word: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub context: String,
}

fn default_language() -> String {
    "es".to_string()
}
