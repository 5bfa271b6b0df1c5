use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no LEARNER/EXPERT lines found in script")]
    EmptyScript,
    #[error("cannot synthesize empty text")]
    EmptyText,
    #[error("synthesis failed: {0}")]
    Collaborator(String),
    #[error("synthesis of segment {index} failed: {message}")]
    Segment { index: usize, message: String },
    #[error("audio file {path} I/O failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pipeline run cancelled")]
    Cancelled,
    #[error("pipeline run exceeded its {0:?} deadline")]
    DeadlineExceeded(Duration),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
