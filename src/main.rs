use aretee_audio::controllers::{audio::AudioController, immersion::ImmersionController};
use aretee_audio::domain::episode::EpisodeService;
use aretee_audio::domain::immersion::ImmersionService;
use aretee_audio::domain::pipeline::{EpisodePipeline, SegmentSynthesizer};
use aretee_audio::domain::voice::VoiceCatalog;
use aretee_audio::infrastructure::config::{Config, LogFormat, TextProvider, TtsProvider};
use aretee_audio::infrastructure::http::{build_router, start_http_server};
use aretee_audio::infrastructure::repositories::{
    AnthropicTextRepository, EpisodeRepository, ImmersionRepository, OpenAiTextRepository,
    OpenAiTtsRepository, PollyTtsRepository, TextGenerationRepository, TtsRepository,
    EPISODES_FILE, IMMERSION_FILE,
};
use async_openai::{config::OpenAIConfig, Client as OpenAiClient};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Aretee audio backend on {}:{}",
        config.host,
        config.port
    );

    tokio::fs::create_dir_all(&config.output_dir).await?;
    tracing::info!(output_dir = %config.output_dir.display(), "Output directory ready");

    let config = Arc::new(config);
    let openai_client = config.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiClient::with_config(
            OpenAIConfig::new().with_api_key(key.clone()),
        ))
    });

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Collaborators
    tracing::info!("Instantiating collaborators...");
    let (tts_repo, voices): (Arc<dyn TtsRepository>, VoiceCatalog) = match config.tts_provider {
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));

            (
                Arc::new(PollyTtsRepository::new(polly_client)) as Arc<dyn TtsRepository>,
                VoiceCatalog::polly(),
            )
        }
        TtsProvider::OpenAi => {
            let client = openai_client
                .clone()
                .ok_or("OPENAI_API_KEY is required for the OpenAI TTS provider")?;
            tracing::info!(model = %config.openai_tts_model, "Using OpenAI TTS");
            (
                Arc::new(OpenAiTtsRepository::new(
                    client,
                    config.openai_tts_model.clone(),
                )) as Arc<dyn TtsRepository>,
                VoiceCatalog::openai(),
            )
        }
    };

    let text_repo: Arc<dyn TextGenerationRepository> = match config.text_provider {
        TextProvider::Anthropic => {
            if config.anthropic_api_key.is_none() {
                tracing::warn!("ANTHROPIC_API_KEY is not set; generation requests will fail until it is configured");
            }
            tracing::info!(model = %config.anthropic_model, "Using Anthropic text generation");
            Arc::new(AnthropicTextRepository::new(
                config.anthropic_api_key.clone(),
                config.anthropic_model.clone(),
            ))
        }
        TextProvider::OpenAi => {
            let client = openai_client
                .clone()
                .ok_or("OPENAI_API_KEY is required for the OpenAI text provider")?;
            tracing::info!(model = %config.openai_text_model, "Using OpenAI text generation");
            Arc::new(OpenAiTextRepository::new(
                client,
                config.openai_text_model.clone(),
            ))
        }
    };

    // 2. Repositories
    let episode_repo = Arc::new(EpisodeRepository::new(config.output_dir.join(EPISODES_FILE)));
    let immersion_repo = Arc::new(ImmersionRepository::new(
        config.output_dir.join(IMMERSION_FILE),
    ));

    // 3. Pipeline and services
    tracing::info!("Instantiating services...");
    let shutdown = CancellationToken::new();
    let voices = Arc::new(voices);
    let synthesizer = Arc::new(SegmentSynthesizer::new(tts_repo));
    let pipeline = Arc::new(EpisodePipeline::new(
        synthesizer.clone(),
        voices.clone(),
        config.output_dir.clone(),
        config.pipeline_timeout(),
    ));
    let episode_service = Arc::new(EpisodeService::new(
        episode_repo,
        text_repo.clone(),
        pipeline,
        shutdown.clone(),
    ));
    let immersion_service = Arc::new(ImmersionService::new(
        immersion_repo,
        text_repo,
        synthesizer,
        voices,
        config.output_dir.clone(),
        config.translation_cache_enabled,
    ));

    // 4. Controllers
    let audio_controller = Arc::new(AudioController::new(episode_service));
    let immersion_controller = Arc::new(ImmersionController::new(immersion_service));

    let app = build_router(audio_controller, immersion_controller, &config.output_dir);
    start_http_server(config, app, shutdown).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aretee_audio=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aretee_audio=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
