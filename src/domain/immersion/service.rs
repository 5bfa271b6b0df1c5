use super::error::ImmersionServiceError;
use super::model::{GeneratedContent, ImmersionItem, WordTranslation};
use super::prompts::{
    content_system_prompt, content_user_prompt, translation_system_prompt,
    translation_user_prompt, ContentType, CONTENT_MAX_TOKENS, TRANSLATION_MAX_TOKENS,
};
use super::response::decode_json_response;
use super::{GenerateImmersionRequest, TranslateRequest};
use crate::domain::pipeline::SegmentSynthesizer;
use crate::domain::voice::VoiceCatalog;
use crate::infrastructure::repositories::{ImmersionRepository, TextGenerationRepository};
use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const MAX_BATCH_SIZE: usize = 10;

const MIN_DIFFICULTY: i32 = 1;
const MAX_DIFFICULTY: i32 = 10;

/// (language, word, context)
type TranslationKey = (String, String, String);

pub struct ImmersionService {
    immersion_repo: Arc<ImmersionRepository>,
    text_repo: Arc<dyn TextGenerationRepository>,
    synthesizer: Arc<SegmentSynthesizer>,
    voices: Arc<VoiceCatalog>,
    output_dir: PathBuf,
    translation_cache: Option<Cache<TranslationKey, WordTranslation>>,
}

impl ImmersionService {
    pub fn new(
        immersion_repo: Arc<ImmersionRepository>,
        text_repo: Arc<dyn TextGenerationRepository>,
        synthesizer: Arc<SegmentSynthesizer>,
        voices: Arc<VoiceCatalog>,
        output_dir: PathBuf,
        cache_enabled: bool,
    ) -> Self {
        let translation_cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(1000)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            immersion_repo,
            text_repo,
            synthesizer,
            voices,
            output_dir,
            translation_cache,
        }
    }
}

#[async_trait]
pub trait ImmersionServiceApi: Send + Sync {
    /// Generate a single immersion feed item
    ///
    /// This operation:
    /// - Validates content type and difficulty before any collaborator call
    /// - Asks the text generator for strict JSON content
    /// - Synthesizes `audio_text` with the language/region voice; a synthesis
    ///   failure leaves `audio_url` empty instead of failing the item
    /// - Appends the item to the feed
    async fn generate_item(
        &self,
        request: GenerateImmersionRequest,
    ) -> Result<ImmersionItem, ImmersionServiceError>;

    /// Generate up to [`MAX_BATCH_SIZE`] items sequentially
    async fn generate_batch(
        &self,
        request: GenerateImmersionRequest,
        count: usize,
    ) -> Result<Vec<ImmersionItem>, ImmersionServiceError>;

    async fn translate_word(
        &self,
        request: TranslateRequest,
    ) -> Result<WordTranslation, ImmersionServiceError>;

    /// Newest-first page of the feed
    async fn get_feed(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ImmersionItem>, ImmersionServiceError>;
}

#[async_trait]
impl ImmersionServiceApi for ImmersionService {
    async fn generate_item(
        &self,
        request: GenerateImmersionRequest,
    ) -> Result<ImmersionItem, ImmersionServiceError> {
        let (content_type, difficulty_level) = validate_generate(&request)?;
        self.generate_validated(request, content_type, difficulty_level)
            .await
    }

    async fn generate_batch(
        &self,
        request: GenerateImmersionRequest,
        count: usize,
    ) -> Result<Vec<ImmersionItem>, ImmersionServiceError> {
        let (content_type, difficulty_level) = validate_generate(&request)?;
        let count = count.min(MAX_BATCH_SIZE);

        tracing::info!(
            count = count,
            content_type = %content_type,
            language = %request.language,
            "Immersion batch generation request"
        );

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let item = self
                .generate_validated(request.clone(), content_type, difficulty_level)
                .await?;
            items.push(item);
        }

        Ok(items)
    }

    async fn translate_word(
        &self,
        request: TranslateRequest,
    ) -> Result<WordTranslation, ImmersionServiceError> {
        let word = request.word.trim();
        if word.is_empty() {
            return Err(ImmersionServiceError::Invalid(
                "Word cannot be empty".to_string(),
            ));
        }

        let key = (
            request.language.clone(),
            word.to_string(),
            request.context.clone(),
        );

        if let Some(cache) = &self.translation_cache {
            if let Some(cached) = cache.get(&key).await {
                tracing::debug!(
                    word = %word,
                    language = %request.language,
                    "Translation cache hit"
                );
                return Ok(cached);
            }
        }

        let raw = self
            .text_repo
            .generate(
                &translation_system_prompt(&request.language),
                &translation_user_prompt(word, &request.language, &request.context),
                TRANSLATION_MAX_TOKENS,
            )
            .await?;

        let translation: WordTranslation = decode_json_response(&raw).map_err(|e| {
            tracing::warn!(word = %word, error = %e, "Translation reply was not valid JSON");
            e
        })?;

        if let Some(cache) = &self.translation_cache {
            cache.insert(key, translation.clone()).await;
        }

        tracing::info!(
            word = %word,
            language = %request.language,
            translation = %translation.translation,
            "Word translated"
        );

        Ok(translation)
    }

    async fn get_feed(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ImmersionItem>, ImmersionServiceError> {
        Ok(self.immersion_repo.find_page(limit, offset).await?)
    }
}

impl ImmersionService {
    async fn generate_validated(
        &self,
        request: GenerateImmersionRequest,
        content_type: ContentType,
        difficulty_level: u8,
    ) -> Result<ImmersionItem, ImmersionServiceError> {
        let item_id = Uuid::new_v4();
        tracing::info!(
            item_id = %item_id,
            content_type = %content_type,
            topic = %request.topic,
            difficulty_level = difficulty_level,
            language = %request.language,
            region = ?request.region,
            "Immersion item generation request"
        );

        // 1. Content from the text generator
        let raw = self
            .text_repo
            .generate(
                &content_system_prompt(&request.language, difficulty_level),
                &content_user_prompt(
                    content_type,
                    &request.topic,
                    difficulty_level,
                    request.region.as_deref(),
                ),
                CONTENT_MAX_TOKENS,
            )
            .await?;

        let content: GeneratedContent = decode_json_response(&raw).map_err(|e| {
            tracing::warn!(item_id = %item_id, error = %e, "Content reply was not valid JSON");
            e
        })?;

        // 2. Audio, best effort
        let audio_url = self
            .synthesize_audio(
                item_id,
                &content.audio_text,
                &request.language,
                request.region.as_deref(),
            )
            .await;

        // 3. Persist
        let item = ImmersionItem {
            id: item_id,
            content_type: content_type.to_string(),
            text: content.text,
            translation: content.translation,
            vocabulary: content.vocabulary,
            audio_text: content.audio_text,
            audio_url,
            topic: request.topic,
            difficulty_level,
            language: request.language,
            region: request.region,
            has_profanity: content.has_profanity,
            created_at: Utc::now(),
        };

        if let Err(e) = self.immersion_repo.create(item.clone()).await {
            if item.audio_url.is_some() {
                let audio_path = self.output_dir.join(audio_file_name(item_id));
                if let Err(remove_err) = tokio::fs::remove_file(&audio_path).await {
                    tracing::warn!(
                        item_id = %item_id,
                        error = %remove_err,
                        "Failed to remove audio of unsaved immersion item"
                    );
                }
            }
            return Err(e.into());
        }

        tracing::info!(
            item_id = %item_id,
            has_audio = item.audio_url.is_some(),
            vocabulary_count = item.vocabulary.len(),
            "Immersion item created"
        );

        Ok(item)
    }

    async fn synthesize_audio(
        &self,
        item_id: Uuid,
        audio_text: &str,
        language: &str,
        region: Option<&str>,
    ) -> Option<String> {
        let resolution = self.voices.resolve_language_voice(language, region);
        tracing::debug!(
            item_id = %item_id,
            language = %language,
            region = ?region,
            voice = %resolution.voice,
            rule = ?resolution.rule,
            "Voice resolved"
        );

        let file_name = audio_file_name(item_id);
        let destination = self.output_dir.join(&file_name);

        match self
            .synthesizer
            .synthesize_to(audio_text, &resolution.voice, &destination)
            .await
        {
            Ok(size_bytes) => {
                tracing::debug!(item_id = %item_id, size_bytes = size_bytes, "Immersion audio written");
                Some(format!("/audio/{}", file_name))
            }
            Err(e) => {
                tracing::warn!(
                    item_id = %item_id,
                    voice = %resolution.voice,
                    error = %e,
                    "Immersion audio synthesis failed, continuing without audio"
                );
                None
            }
        }
    }
}

fn audio_file_name(item_id: Uuid) -> String {
    format!("immersion_{}.mp3", item_id)
}

fn validate_generate(
    request: &GenerateImmersionRequest,
) -> Result<(ContentType, u8), ImmersionServiceError> {
    let content_type = request
        .content_type
        .parse::<ContentType>()
        .map_err(ImmersionServiceError::Invalid)?;

    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&request.difficulty_level) {
        return Err(ImmersionServiceError::Invalid(
            "difficulty_level must be 1-10".to_string(),
        ));
    }

    Ok((content_type, request.difficulty_level as u8))
}
