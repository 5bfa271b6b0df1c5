//! Back-to-back concatenation of MP3 units.
//!
//! MP3 decoders resync on frame headers, so raw concatenation plays as one
//! stream. Nothing is re-encoded and no silence is inserted.

use super::error::PipelineError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Concatenate in-memory audio units in order
pub fn concat<B: AsRef<[u8]>>(units: &[B]) -> Vec<u8> {
    let total = units.iter().map(|u| u.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for unit in units {
        out.extend_from_slice(unit.as_ref());
    }
    out
}

/// Concatenate unit files into `destination`, in slice order.
///
/// Returns the number of bytes written. On failure the partial destination
/// file is removed before the error is returned.
pub async fn assemble(unit_paths: &[PathBuf], destination: &Path) -> Result<u64, PipelineError> {
    let result = write_units(unit_paths, destination).await;

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(destination).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %destination.display(),
                    error = %e,
                    "Failed to remove partial assembled audio"
                );
            }
        }
    }

    result
}

async fn write_units(unit_paths: &[PathBuf], destination: &Path) -> Result<u64, PipelineError> {
    let mut out = tokio::fs::File::create(destination)
        .await
        .map_err(|e| PipelineError::io(destination, e))?;
    let mut written = 0u64;

    for path in unit_paths {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PipelineError::io(path, e))?;
        out.write_all(&bytes)
            .await
            .map_err(|e| PipelineError::io(destination, e))?;
        written += bytes.len() as u64;
    }

    out.flush()
        .await
        .map_err(|e| PipelineError::io(destination, e))?;

    Ok(written)
}
