use super::Voice;
use crate::domain::script::Speaker;
use std::collections::HashMap;

/// Default voice for a language plus optional per-region overrides
#[derive(Debug, Clone)]
pub struct LanguageVoices {
    pub default: Voice,
    pub regions: HashMap<String, Voice>,
}

impl LanguageVoices {
    fn new(default: &str, regions: &[(&str, &str)]) -> Self {
        Self {
            default: Voice::from(default),
            regions: regions
                .iter()
                .map(|(region, voice)| (region.to_string(), Voice::from(*voice)))
                .collect(),
        }
    }
}

/// Which row of the decision table produced a voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceRule {
    RegionOverride,
    LanguageDefault,
    GlobalDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceResolution {
    pub voice: Voice,
    pub rule: VoiceRule,
}

/// Voice decision table for one TTS provider.
///
/// Speaker voices are a total mapping over [`Speaker`]. Language lookups never
/// fail: an unknown language gets `default_voice`, an unknown region keeps the
/// language default.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    learner: Voice,
    expert: Voice,
    default_voice: Voice,
    languages: HashMap<String, LanguageVoices>,
}

impl VoiceCatalog {
    pub fn new(
        learner: Voice,
        expert: Voice,
        default_voice: Voice,
        languages: HashMap<String, LanguageVoices>,
    ) -> Self {
        Self {
            learner,
            expert,
            default_voice,
            languages,
        }
    }

    /// Neural AWS Polly voices
    pub fn polly() -> Self {
        let languages = [
            (
                "es",
                LanguageVoices::new(
                    "Mia",
                    &[
                        ("Spain", "Lucia"),
                        ("Mexico", "Mia"),
                        ("United States", "Lupe"),
                    ],
                ),
            ),
            (
                "en",
                LanguageVoices::new(
                    "Joanna",
                    &[
                        ("United States", "Joanna"),
                        ("United Kingdom", "Amy"),
                        ("Australia", "Olivia"),
                    ],
                ),
            ),
            (
                "fr",
                LanguageVoices::new("Lea", &[("France", "Lea"), ("Canada", "Gabrielle")]),
            ),
            (
                "de",
                LanguageVoices::new("Vicki", &[("Germany", "Vicki"), ("Austria", "Hannah")]),
            ),
            (
                "pt",
                LanguageVoices::new("Camila", &[("Brazil", "Camila"), ("Portugal", "Ines")]),
            ),
            ("it", LanguageVoices::new("Bianca", &[])),
            ("ja", LanguageVoices::new("Kazuha", &[])),
            ("ko", LanguageVoices::new("Seoyeon", &[])),
            ("zh", LanguageVoices::new("Zhiyu", &[])),
            ("ar", LanguageVoices::new("Hala", &[])),
        ];

        Self::new(
            Voice::from("Joanna"),
            Voice::from("Matthew"),
            Voice::from("Mia"),
            languages
                .into_iter()
                .map(|(code, voices)| (code.to_string(), voices))
                .collect(),
        )
    }

    /// OpenAI speech voices. They are multilingual, so there are no regional rows.
    pub fn openai() -> Self {
        let languages = [
            ("en", "alloy"),
            ("es", "echo"),
            ("fr", "nova"),
            ("de", "onyx"),
            ("it", "fable"),
            ("pt", "shimmer"),
            ("ja", "nova"),
            ("ko", "nova"),
            ("zh", "alloy"),
            ("ar", "onyx"),
        ];

        Self::new(
            Voice::from("nova"),
            Voice::from("onyx"),
            Voice::from("echo"),
            languages
                .into_iter()
                .map(|(code, voice)| (code.to_string(), LanguageVoices::new(voice, &[])))
                .collect(),
        )
    }

    /// Voice for one side of a two-speaker script
    pub fn resolve_speaker_voice(&self, speaker: Speaker) -> &Voice {
        match speaker {
            Speaker::Learner => &self.learner,
            Speaker::Expert => &self.expert,
        }
    }

    /// Best-effort voice for a language and optional region
    pub fn resolve_language_voice(&self, language: &str, region: Option<&str>) -> VoiceResolution {
        let Some(voices) = self.languages.get(language) else {
            return VoiceResolution {
                voice: self.default_voice.clone(),
                rule: VoiceRule::GlobalDefault,
            };
        };

        match region.and_then(|r| voices.regions.get(r)) {
            Some(voice) => VoiceResolution {
                voice: voice.clone(),
                rule: VoiceRule::RegionOverride,
            },
            None => VoiceResolution {
                voice: voices.default.clone(),
                rule: VoiceRule::LanguageDefault,
            },
        }
    }
}
