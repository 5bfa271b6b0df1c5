use super::error::PipelineError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Per-run scratch directory holding audio units.
///
/// Units are addressed by ordinal index only (`seg_000.mp3`, `seg_001.mp3`,
/// ...). A path is registered before anything is written to it so that a
/// half-written unit is still cleaned up. If the area is dropped without
/// [`WorkArea::cleanup`] (the run future was dropped), the directory is
/// removed synchronously in `Drop`.
#[derive(Debug)]
pub struct WorkArea {
    dir: PathBuf,
    units: Vec<PathBuf>,
    cleaned: bool,
}

impl WorkArea {
    pub async fn create(root: &Path, run_id: Uuid) -> Result<Self, PipelineError> {
        let dir = root.join(format!("_temp_{}", run_id));
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| PipelineError::io(&dir, e))?;

        Ok(Self {
            dir,
            units: Vec::new(),
            cleaned: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Register the next unit and return its index and path
    pub fn next_unit(&mut self) -> (usize, PathBuf) {
        let index = self.units.len();
        let path = self.dir.join(format!("seg_{:03}.mp3", index));
        self.units.push(path.clone());
        (index, path)
    }

    /// Unit paths in index order
    pub fn unit_paths(&self) -> &[PathBuf] {
        &self.units
    }

    /// Delete every unit and the directory itself.
    ///
    /// Never fails; anything that could not be removed is returned as a
    /// warning message.
    pub async fn cleanup(mut self) -> Vec<String> {
        self.cleaned = true;
        let mut warnings = Vec::new();

        for path in &self.units {
            if let Err(e) = tokio::fs::remove_file(path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warnings.push(format!("failed to delete {}: {}", path.display(), e));
                }
            }
        }

        if let Err(e) = tokio::fs::remove_dir(&self.dir).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warnings.push(format!("failed to delete {}: {}", self.dir.display(), e));
            }
        }

        for warning in &warnings {
            tracing::warn!(work_area = %self.dir.display(), "{}", warning);
        }

        warnings
    }
}

impl Drop for WorkArea {
    fn drop(&mut self) {
        if self.cleaned {
            return;
        }

        match std::fs::remove_dir_all(&self.dir) {
            Ok(()) => tracing::debug!(work_area = %self.dir.display(), "Work area removed on drop"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                work_area = %self.dir.display(),
                error = %e,
                "Failed to remove work area on drop"
            ),
        }
    }
}
