pub mod assembler;
pub mod error;
pub mod orchestrator;
pub mod synthesizer;
pub mod work_area;

pub use error::PipelineError;
pub use orchestrator::{AssembledAudio, EpisodePipeline, PipelineState};
pub use synthesizer::SegmentSynthesizer;
pub use work_area::WorkArea;
