use aretee_audio::domain::voice::Voice;
use aretee_audio::infrastructure::repositories::{
    TextGenerationError, TextGenerationRepository, TtsRepository,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;

use super::fixtures;

/// Minimal MP3 frame header, prefixed to every fake synthesis result
pub const MP3_FRAME: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

/// What the fake text generator answers for one kind of prompt
#[derive(Clone)]
pub enum Reply {
    Text(String),
    MissingCredential,
    ServiceError,
}

/// Text generator that routes on the system prompt and answers with canned replies
pub struct FakeTextGenerator {
    script: Mutex<Reply>,
    content: Mutex<Reply>,
    translation: Mutex<Reply>,
    calls: Mutex<usize>,
}

impl FakeTextGenerator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(Reply::Text(fixtures::SCRIPT.to_string())),
            content: Mutex::new(Reply::Text(fixtures::immersion_content_json())),
            translation: Mutex::new(Reply::Text(fixtures::translation_json())),
            calls: Mutex::new(0),
        }
    }

    pub fn set_script(&self, reply: Reply) {
        *self.script.lock() = reply;
    }

    pub fn set_content(&self, reply: Reply) {
        *self.content.lock() = reply;
    }

    #[allow(dead_code)]
    pub fn set_translation(&self, reply: Reply) {
        *self.translation.lock() = reply;
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl TextGenerationRepository for FakeTextGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
    ) -> Result<String, TextGenerationError> {
        *self.calls.lock() += 1;

        let reply = if system_prompt.contains("LEARNER") {
            self.script.lock().clone()
        } else if system_prompt.starts_with("Translate") {
            self.translation.lock().clone()
        } else {
            self.content.lock().clone()
        };

        match reply {
            Reply::Text(text) => Ok(text),
            Reply::MissingCredential => Err(TextGenerationError::MissingCredential(
                "ANTHROPIC_API_KEY is not set".to_string(),
            )),
            Reply::ServiceError => Err(TextGenerationError::Service(
                "upstream returned 529 overloaded".to_string(),
            )),
        }
    }
}

/// Speech synthesizer that returns `MP3_FRAME + voice + "|" + text`
pub struct FakeTts {
    fail: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
    voices: Mutex<Vec<String>>,
}

impl FakeTts {
    pub fn new() -> Self {
        Self {
            fail: Mutex::new(false),
            delay: Mutex::new(None),
            voices: Mutex::new(Vec::new()),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock() = fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn voices(&self) -> Vec<String> {
        self.voices.lock().clone()
    }

    pub fn audio_for(voice: &str, text: &str) -> Vec<u8> {
        let mut audio = MP3_FRAME.to_vec();
        audio.extend_from_slice(format!("{}|{}", voice, text).as_bytes());
        audio
    }
}

#[async_trait]
impl TtsRepository for FakeTts {
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Vec<u8>, String> {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.voices.lock().push(voice.to_string());

        if *self.fail.lock() {
            return Err("speech service unavailable".to_string());
        }

        Ok(Self::audio_for(voice.as_str(), text))
    }
}
