use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::extract::{ApiJson, ApiQuery};
use crate::{
    domain::immersion::{
        GenerateImmersionRequest, ImmersionItem, ImmersionService, ImmersionServiceApi,
        TranslateRequest, WordTranslation,
    },
    error::AppResult,
};

#[derive(Debug, Deserialize)]
pub struct BatchParams {
    #[serde(default = "default_batch_count")]
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(default = "default_feed_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_batch_count() -> usize {
    5
}

fn default_feed_limit() -> usize {
    20
}

pub struct ImmersionController {
    immersion_service: Arc<ImmersionService>,
}

impl ImmersionController {
    pub fn new(immersion_service: Arc<ImmersionService>) -> Self {
        Self { immersion_service }
    }

    /// POST /api/immersion/generate - Generate one feed item
    pub async fn generate(
        State(controller): State<Arc<ImmersionController>>,
        ApiJson(request): ApiJson<GenerateImmersionRequest>,
    ) -> AppResult<Json<ImmersionItem>> {
        let item = controller.immersion_service.generate_item(request).await?;
        Ok(Json(item))
    }

    /// POST /api/immersion/generate-batch?count=N - Generate up to 10 items
    pub async fn generate_batch(
        State(controller): State<Arc<ImmersionController>>,
        ApiQuery(params): ApiQuery<BatchParams>,
        ApiJson(request): ApiJson<GenerateImmersionRequest>,
    ) -> AppResult<Json<Vec<ImmersionItem>>> {
        let items = controller
            .immersion_service
            .generate_batch(request, params.count)
            .await?;
        Ok(Json(items))
    }

    /// POST /api/immersion/translate - Translate a single word
    pub async fn translate(
        State(controller): State<Arc<ImmersionController>>,
        ApiJson(request): ApiJson<TranslateRequest>,
    ) -> AppResult<Json<WordTranslation>> {
        let translation = controller.immersion_service.translate_word(request).await?;
        Ok(Json(translation))
    }

    /// GET /api/immersion/feed?limit=&offset= - Newest-first feed page
    pub async fn feed(
        State(controller): State<Arc<ImmersionController>>,
        ApiQuery(params): ApiQuery<FeedParams>,
    ) -> AppResult<Json<Vec<ImmersionItem>>> {
        let items = controller
            .immersion_service
            .get_feed(params.limit, params.offset)
            .await?;
        Ok(Json(items))
    }
}
