use std::fmt;
use std::str::FromStr;

pub const CONTENT_MAX_TOKENS: u32 = 1500;
pub const TRANSLATION_MAX_TOKENS: u32 = 200;

const FALLBACK_LEVEL: &str = "intermediate (B1)";

/// Kinds of immersion content the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Dialogue,
    News,
    Cultural,
    Overheard,
    Slang,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Dialogue,
        ContentType::News,
        ContentType::Cultural,
        ContentType::Overheard,
        ContentType::Slang,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Dialogue => "dialogue",
            ContentType::News => "news",
            ContentType::Cultural => "cultural",
            ContentType::Overheard => "overheard",
            ContentType::Slang => "slang",
        }
    }

    fn instructions(&self, topic: &str, level: &str, region: &str) -> String {
        match self {
            ContentType::Dialogue => format!(
                "Create a short, natural 2-person conversation (4-8 exchanges) about {topic}. Use realistic speech patterns for {level} level learners. Include filler words and natural hesitations."
            ),
            ContentType::News => format!(
                "Write a short news summary (3-5 sentences) about {topic}. Calibrate vocabulary and grammar for {level} level learners."
            ),
            ContentType::Cultural => format!(
                "Write a short cultural explainer (3-5 sentences) about {topic} relevant to {region} culture. Target {level} level learners."
            ),
            ContentType::Overheard => format!(
                "Simulate an overheard conversation snippet (3-6 exchanges) between strangers discussing {topic}. Make it feel like you're catching the middle of a conversation. Use natural, casual speech for {level} level."
            ),
            ContentType::Slang => format!(
                "Create a street language lesson about {topic}. Include 3-5 slang expressions with examples. Mark any profanity. Target {region} dialect. Include: filler words, texting abbreviations, and casual register examples. Level: {level}."
            ),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ContentType::ALL.iter().map(|ct| ct.as_str()).collect();
                format!("Invalid content_type. Must be one of: {}", valid.join(", "))
            })
    }
}

/// CEFR description for a 1-10 difficulty level
pub fn level_description(level: u8) -> &'static str {
    match level {
        1 => "absolute beginner (A1 - basic greetings only)",
        2 => "beginner (A1 - simple phrases)",
        3 => "elementary (A2 - basic sentences)",
        4 => "pre-intermediate (A2-B1)",
        5 => "intermediate (B1)",
        6 => "upper-intermediate (B1-B2)",
        7 => "advanced (B2)",
        8 => "upper-advanced (B2-C1)",
        9 => "near-native (C1)",
        10 => "native-level (C2 - includes idioms, slang, complex grammar)",
        _ => FALLBACK_LEVEL,
    }
}

/// Display name for a language code; unknown codes are returned as-is
pub fn language_name(code: &str) -> &str {
    match code {
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese (Mandarin)",
        "pt" => "Portuguese",
        "it" => "Italian",
        "ar" => "Arabic",
        other => other,
    }
}

pub fn content_system_prompt(language: &str, difficulty_level: u8) -> String {
    let lang = language_name(language);
    format!(
        r#"You are a {lang} language content generator for immersion learning.

Generate content in {lang} with these rules:
1. ALL main content must be in {lang}
2. Tag vocabulary by difficulty (1-10)
3. Provide a full English translation
4. For "slang" content, flag if it contains profanity

Respond ONLY with valid JSON in this exact format:
{{
  "text": "<the {lang} content>",
  "translation": "<full English translation>",
  "vocabulary": [
    {{"word": "<{lang} word>", "meaning": "<English meaning>", "difficulty": <1-10>}},
    ...
  ],
  "audio_text": "<clean version of text optimized for TTS reading, no labels or formatting>",
  "has_profanity": false
}}

For dialogues/conversations, use A: and B: labels in the text.
For audio_text, provide a natural reading version without speaker labels.
Include 5-10 vocabulary items, focusing on words at or near difficulty level {difficulty_level}."#
    )
}

pub fn content_user_prompt(
    content_type: ContentType,
    topic: &str,
    difficulty_level: u8,
    region: Option<&str>,
) -> String {
    content_type.instructions(
        topic,
        level_description(difficulty_level),
        region.unwrap_or("general"),
    )
}

pub fn translation_system_prompt(language: &str) -> String {
    format!(
        "Translate {} words to English. Respond ONLY with valid JSON.",
        language_name(language)
    )
}

pub fn translation_user_prompt(word: &str, language: &str, context: &str) -> String {
    let context_note = if context.is_empty() {
        String::new()
    } else {
        format!(" in the context: \"{}\"", context)
    };

    format!(
        r#"Translate the {lang} word "{word}"{context_note}. Return JSON: {{"word": "{word}", "translation": "...", "part_of_speech": "...", "example": "..."}}"#,
        lang = language_name(language),
    )
}
