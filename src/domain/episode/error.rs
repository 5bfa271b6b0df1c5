use crate::domain::pipeline::PipelineError;
use crate::error::AppError;
use crate::infrastructure::repositories::{StoreError, TextGenerationError};

#[derive(Debug, thiserror::Error)]
pub enum EpisodeServiceError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("generated script has no LEARNER/EXPERT lines")]
    EmptyScript,
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("episode not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("episode generation cancelled")]
    Cancelled,
    #[error("{0}")]
    Timeout(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TextGenerationError> for EpisodeServiceError {
    fn from(err: TextGenerationError) -> Self {
        match err {
            TextGenerationError::MissingCredential(msg) => EpisodeServiceError::Configuration(msg),
            TextGenerationError::Service(msg) => EpisodeServiceError::Dependency(msg),
        }
    }
}

impl From<PipelineError> for EpisodeServiceError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::EmptyScript => EpisodeServiceError::EmptyScript,
            PipelineError::Cancelled => EpisodeServiceError::Cancelled,
            PipelineError::DeadlineExceeded(_) => EpisodeServiceError::Timeout(err.to_string()),
            PipelineError::Collaborator(_) | PipelineError::Segment { .. } => {
                EpisodeServiceError::Dependency(err.to_string())
            }
            PipelineError::EmptyText | PipelineError::Io { .. } => {
                EpisodeServiceError::Other(anyhow::Error::new(err))
            }
        }
    }
}

impl From<StoreError> for EpisodeServiceError {
    fn from(err: StoreError) -> Self {
        EpisodeServiceError::Storage(err.to_string())
    }
}

impl From<EpisodeServiceError> for AppError {
    fn from(err: EpisodeServiceError) -> Self {
        match err {
            EpisodeServiceError::Configuration(msg) => AppError::Configuration(msg),
            EpisodeServiceError::Invalid(msg) => AppError::BadRequest(msg),
            EpisodeServiceError::EmptyScript => AppError::EmptyScript(
                "Generated script contained no LEARNER/EXPERT lines".to_string(),
            ),
            EpisodeServiceError::Dependency(msg) => AppError::ExternalService(msg),
            EpisodeServiceError::NotFound => AppError::NotFound("Episode not found".to_string()),
            EpisodeServiceError::Storage(msg) => AppError::Storage(msg),
            EpisodeServiceError::Cancelled => {
                AppError::Cancelled("Episode generation cancelled".to_string())
            }
            EpisodeServiceError::Timeout(msg) => AppError::Timeout(msg),
            EpisodeServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
