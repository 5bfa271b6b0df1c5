use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
    // Text generation
    pub text_provider: TextProvider,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub openai_api_key: Option<String>,
    pub openai_text_model: String,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub aws_region: String,
    pub openai_tts_model: String,
    // Pipeline
    pub pipeline_timeout_secs: u64,
    // Translation cache
    pub translation_cache_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextProvider {
    Anthropic,
    OpenAi,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TtsProvider {
    Polly,
    OpenAi,
}

impl std::str::FromStr for TextProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(TextProvider::Anthropic),
            "openai" => Ok(TextProvider::OpenAi),
            other => Err(format!(
                "TEXT_PROVIDER must be 'anthropic' or 'openai', got '{}'",
                other
            )),
        }
    }
}

impl std::str::FromStr for TtsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polly" => Ok(TtsProvider::Polly),
            "openai" => Ok(TtsProvider::OpenAi),
            other => Err(format!(
                "TTS_PROVIDER must be 'polly' or 'openai', got '{}'",
                other
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            text_provider: env::var("TEXT_PROVIDER")
                .unwrap_or_else(|_| "anthropic".to_string())
                .parse()?,
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| "claude-3-5-haiku-latest".to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_text_model: env::var("OPENAI_TEXT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            tts_provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "polly".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            openai_tts_model: env::var("OPENAI_TTS_MODEL")
                .unwrap_or_else(|_| "tts-1".to_string()),
            pipeline_timeout_secs: env::var("PIPELINE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            translation_cache_enabled: env::var("TRANSLATION_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        config.validate()?;

        Ok(config)
    }

    /// OpenAI credentials are needed up front; a missing Anthropic key is
    /// reported per request instead.
    fn validate(&self) -> Result<(), String> {
        let needs_openai =
            self.text_provider == TextProvider::OpenAi || self.tts_provider == TtsProvider::OpenAi;
        if needs_openai && self.openai_api_key.is_none() {
            return Err("OPENAI_API_KEY is required when an OpenAI provider is selected".to_string());
        }
        if self.pipeline_timeout_secs == 0 {
            return Err("PIPELINE_TIMEOUT_SECS must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn pipeline_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline_timeout_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
