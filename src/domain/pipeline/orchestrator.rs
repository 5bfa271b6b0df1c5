use super::assembler::assemble;
use super::error::PipelineError;
use super::synthesizer::SegmentSynthesizer;
use super::work_area::WorkArea;
use crate::domain::script::{parse_script, Segment};
use crate::domain::voice::VoiceCatalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Parsing,
    Synthesizing(usize),
    Assembling,
    Done,
    Aborted,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct AssembledAudio {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub segment_count: usize,
    /// Non-fatal cleanup problems
    pub warnings: Vec<String>,
}

/// Script → segments → per-speaker synthesis → one MP3.
///
/// Segments are synthesized one at a time in script order into a fresh work
/// area, then concatenated into `<output_dir>/<episode_id>.mp3`. Whatever the
/// outcome, the work area is gone when `run` returns.
pub struct EpisodePipeline {
    synthesizer: Arc<SegmentSynthesizer>,
    voices: Arc<VoiceCatalog>,
    output_dir: PathBuf,
    run_timeout: Duration,
}

impl EpisodePipeline {
    pub fn new(
        synthesizer: Arc<SegmentSynthesizer>,
        voices: Arc<VoiceCatalog>,
        output_dir: PathBuf,
        run_timeout: Duration,
    ) -> Self {
        Self {
            synthesizer,
            voices,
            output_dir,
            run_timeout,
        }
    }

    pub fn output_path(&self, episode_id: Uuid) -> PathBuf {
        self.output_dir.join(format!("{}.mp3", episode_id))
    }

    pub async fn run(
        &self,
        episode_id: Uuid,
        script: &str,
        cancel: &CancellationToken,
    ) -> Result<AssembledAudio, PipelineError> {
        let mut state = PipelineState::Parsing;
        let segments = parse_script(script);

        if segments.is_empty() {
            tracing::warn!(
                episode_id = %episode_id,
                script_length = script.len(),
                "Pipeline aborted: script has no speaker lines"
            );
            return Err(PipelineError::EmptyScript);
        }

        tracing::info!(
            episode_id = %episode_id,
            segment_count = segments.len(),
            "Script parsed"
        );

        let final_path = self.output_path(episode_id);
        let mut area = WorkArea::create(&self.output_dir, episode_id).await?;

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PipelineError::Cancelled),
            _ = tokio::time::sleep(self.run_timeout) => {
                Err(PipelineError::DeadlineExceeded(self.run_timeout))
            }
            result = self.synthesize_and_assemble(&segments, &mut area, &final_path, &mut state) => result,
        };

        match outcome {
            Ok(size_bytes) => {
                let warnings = area.cleanup().await;
                state = PipelineState::Done;
                tracing::info!(
                    episode_id = %episode_id,
                    state = ?state,
                    path = %final_path.display(),
                    size_bytes,
                    cleanup_warnings = warnings.len(),
                    "Episode audio assembled"
                );

                Ok(AssembledAudio {
                    path: final_path,
                    size_bytes,
                    segment_count: segments.len(),
                    warnings,
                })
            }
            Err(err) => {
                tracing::warn!(
                    episode_id = %episode_id,
                    aborted_in = ?state,
                    error = %err,
                    "Pipeline aborted, cleaning up"
                );
                state = PipelineState::Aborted;

                area.cleanup().await;
                remove_partial_output(&final_path).await;

                tracing::debug!(episode_id = %episode_id, state = ?state, "Cleanup finished");
                Err(err)
            }
        }
    }

    async fn synthesize_and_assemble(
        &self,
        segments: &[Segment],
        area: &mut WorkArea,
        final_path: &Path,
        state: &mut PipelineState,
    ) -> Result<u64, PipelineError> {
        for segment in segments {
            let (index, unit_path) = area.next_unit();
            *state = PipelineState::Synthesizing(index);

            let voice = self.voices.resolve_speaker_voice(segment.speaker);
            tracing::debug!(
                index,
                speaker = %segment.speaker,
                voice = %voice,
                text_length = segment.text.len(),
                "Synthesizing segment"
            );

            self.synthesizer
                .synthesize_to(&segment.text, voice, &unit_path)
                .await
                .map_err(|e| match e {
                    PipelineError::Collaborator(message) => PipelineError::Segment { index, message },
                    other => other,
                })?;
        }

        *state = PipelineState::Assembling;
        assemble(area.unit_paths(), final_path).await
    }
}

async fn remove_partial_output(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed partial episode audio"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to remove partial episode audio"
        ),
    }
}
