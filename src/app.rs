//! Application orchestration for the single-shot extraction run.
//!
//! One linear procedure: echo the request, call the endpoint, persist
//! the returned document, log the defensive summary. Any failure along
//! the way propagates to the caller; nothing is retried.

use crate::client::VdpClient;
use crate::config::Config;
use crate::models::VdpSummary;
use crate::Result;
use serde_json::Value;
use std::fs;
use tracing::info;

pub struct App {
    client: VdpClient,
    config: Config,
}

impl App {
    /// Build the app with the compiled-in defaults.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Build the app from an explicit configuration. Tests use this to
    /// substitute a mock endpoint and a temporary output path.
    pub fn with_config(config: Config) -> Result<Self> {
        let client = VdpClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Runs the single extraction attempt: send, persist, summarize.
    ///
    /// The output file is written only after the response parses; every
    /// failure path leaves no file behind for this run.
    pub async fn run(&self) -> Result<VdpSummary> {
        info!("Requesting VDP extraction");
        info!("URL: {}", self.config.extract_url);
        info!(
            "Payload: {}",
            serde_json::to_string_pretty(&self.config.payload)?
        );
        info!(
            "Waiting for extraction (up to {:?})",
            self.config.timeout
        );

        let document = self.client.extract(&self.config.payload).await?;
        info!("Extraction response received");

        self.write_document(&document.body)?;
        info!("VDP saved to {}", self.config.output_path.display());

        let summary = VdpSummary::from_document(&document);
        self.log_summary(&summary);

        Ok(summary)
    }

    fn write_document(&self, document: &Value) -> Result<()> {
        if let Some(parent) = self.config.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        // serde_json pretty-prints with 2-space indentation and leaves
        // non-ASCII characters unescaped, matching the persisted format.
        let pretty = serde_json::to_string_pretty(document)?;
        fs::write(&self.config.output_path, pretty)?;
        Ok(())
    }

    fn log_summary(&self, summary: &VdpSummary) {
        info!("Quality:");
        info!("  Scenes: {}", summary.scenes_count());
        info!("  Shots: {}", summary.shots_count());
        info!("  Keyframes: {}", summary.keyframes_count());
        info!("  Composition notes: {}", summary.composition_notes());
        info!("Hook genome:");
        info!("  Pattern: {}", summary.pattern_code());
        info!("  Strength: {}", summary.strength_score());
        info!("  Start: {}s", summary.start_sec());
        info!("  End: {}s", summary.end_sec());
        info!("Response size: {} bytes", summary.body_bytes);
        info!("Content ID: {}", summary.content_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer, output_path: PathBuf) -> Config {
        Config {
            extract_url: format!("{}/api/vdp/extract-vertex", server.uri()),
            output_path,
            ..Config::default()
        }
    }

    async fn mount_success(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/vdp/extract-vertex"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_run_persists_document_and_returns_summary() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            serde_json::json!({
                "google_vdp_quality": { "scenes_count": 5, "shots_count": 9 },
                "hook_genome": { "pattern_code": "SHOCK_OPEN", "strength_score": 0.7 }
            }),
        )
        .await;

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("vdp").join("result.json");
        let app = App::with_config(test_config(&server, output_path.clone())).unwrap();

        let summary = app.run().await.unwrap();
        assert_eq!(summary.scenes_count(), 5);
        assert_eq!(summary.pattern_code(), "SHOCK_OPEN");

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(
            written["google_vdp_quality"]["shots_count"],
            serde_json::json!(9)
        );
    }

    #[tokio::test]
    async fn test_run_failure_leaves_no_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("result.json");
        let app = App::with_config(test_config(&server, output_path.clone())).unwrap();

        assert!(app.run().await.is_err());
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_run_timeout_leaves_no_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("result.json");
        let config = Config {
            timeout: Duration::from_millis(50),
            ..test_config(&server, output_path.clone())
        };
        let app = App::with_config(config).unwrap();

        assert!(matches!(
            app.run().await.unwrap_err(),
            crate::Error::Timeout(_)
        ));
        assert!(!output_path.exists());
    }
}
