use crate::error::AppError;
use crate::infrastructure::repositories::{StoreError, TextGenerationError};

#[derive(Debug, thiserror::Error)]
pub enum ImmersionServiceError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("malformed generator response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TextGenerationError> for ImmersionServiceError {
    fn from(err: TextGenerationError) -> Self {
        match err {
            TextGenerationError::MissingCredential(msg) => {
                ImmersionServiceError::Configuration(msg)
            }
            TextGenerationError::Service(msg) => ImmersionServiceError::Dependency(msg),
        }
    }
}

impl From<StoreError> for ImmersionServiceError {
    fn from(err: StoreError) -> Self {
        ImmersionServiceError::Storage(err.to_string())
    }
}

impl From<ImmersionServiceError> for AppError {
    fn from(err: ImmersionServiceError) -> Self {
        match err {
            ImmersionServiceError::Configuration(msg) => AppError::Configuration(msg),
            ImmersionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ImmersionServiceError::Dependency(msg) => AppError::ExternalService(msg),
            ImmersionServiceError::MalformedResponse(e) => {
                AppError::MalformedResponse(format!("Generator returned invalid JSON: {}", e))
            }
            ImmersionServiceError::Storage(msg) => AppError::Storage(msg),
            ImmersionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
