pub mod catalog;

pub use catalog::{LanguageVoices, VoiceCatalog, VoiceResolution, VoiceRule};

use serde::{Deserialize, Serialize};

/// Provider specific voice identifier (e.g. a Polly `VoiceId` or an OpenAI voice name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Voice(String);

impl Voice {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Voice {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
