use aretee_audio::controllers::{audio::AudioController, immersion::ImmersionController};
use aretee_audio::domain::episode::EpisodeService;
use aretee_audio::domain::immersion::ImmersionService;
use aretee_audio::domain::pipeline::{EpisodePipeline, SegmentSynthesizer};
use aretee_audio::domain::voice::VoiceCatalog;
use aretee_audio::infrastructure::http::build_router;
use aretee_audio::infrastructure::repositories::{
    EpisodeRepository, ImmersionRepository, EPISODES_FILE, IMMERSION_FILE,
};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub mod api_client;
pub mod fakes;
pub mod fixtures;

use api_client::TestClient;
use fakes::{FakeTextGenerator, FakeTts};

/// Per-run deadline used by the test server
pub const PIPELINE_TIMEOUT: Duration = Duration::from_secs(2);

/// A real router served on an ephemeral port, backed by fake collaborators
/// and a private output directory.
pub struct TestContext {
    pub client: TestClient,
    pub text: Arc<FakeTextGenerator>,
    pub tts: Arc<FakeTts>,
    pub shutdown: CancellationToken,
    output_dir: TempDir,
}

impl TestContext {
    pub fn output_dir(&self) -> &Path {
        self.output_dir.path()
    }

    /// Files in the output directory, sorted by name
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let output_dir = tempfile::tempdir().expect("Failed to create output dir");
            let text = Arc::new(FakeTextGenerator::new());
            let tts = Arc::new(FakeTts::new());
            let shutdown = CancellationToken::new();

            let app = create_app(output_dir.path(), text.clone(), tts.clone(), shutdown.clone());

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                text,
                tts,
                shutdown,
                output_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            self.shutdown.cancel();
        }
    }
}

fn create_app(
    output_dir: &Path,
    text: Arc<FakeTextGenerator>,
    tts: Arc<FakeTts>,
    shutdown: CancellationToken,
) -> Router {
    let voices = Arc::new(VoiceCatalog::polly());
    let synthesizer = Arc::new(SegmentSynthesizer::new(tts));
    let pipeline = Arc::new(EpisodePipeline::new(
        synthesizer.clone(),
        voices.clone(),
        output_dir.to_path_buf(),
        PIPELINE_TIMEOUT,
    ));

    let episode_service = Arc::new(EpisodeService::new(
        Arc::new(EpisodeRepository::new(output_dir.join(EPISODES_FILE))),
        text.clone(),
        pipeline,
        shutdown,
    ));
    let immersion_service = Arc::new(ImmersionService::new(
        Arc::new(ImmersionRepository::new(output_dir.join(IMMERSION_FILE))),
        text,
        synthesizer,
        voices,
        output_dir.to_path_buf(),
        true,
    ));

    build_router(
        Arc::new(AudioController::new(episode_service)),
        Arc::new(ImmersionController::new(immersion_service)),
        output_dir,
    )
}
