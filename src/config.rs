//! Runtime configuration
//!
//! Every parameter of an extraction run is a compiled-in default: the
//! endpoint, the request payload, the round-trip bound, and the output
//! path. The struct exists so tests can point the client at a mock
//! endpoint and a temporary output path without touching process logic.

use crate::models::{ExtractRequest, RequestMeta};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_EXTRACT_URL: &str =
    "https://t2-vdp-355516763169.us-west1.run.app/api/vdp/extract-vertex";
const DEFAULT_OUTPUT_PATH: &str = "out/vdp/ENHANCED_VDP.json";

// Extraction runs server-side model inference and can legitimately take
// minutes to answer.
const DEFAULT_TIMEOUT_SECS: u64 = 900;

const DEFAULT_GCS_URI: &str = "gs://tough-variety-raw/raw/ingest/6_I2FmT1mbY.mp4";
const DEFAULT_PLATFORM: &str = "youtube";
const DEFAULT_LANGUAGE: &str = "ko";
const DEFAULT_SOURCE_URL: &str = "https://www.youtube.com/shorts/6_I2FmT1mbY";

#[derive(Debug, Clone)]
pub struct Config {
    /// Extraction endpoint receiving the POST.
    pub extract_url: String,
    /// Request body sent to the endpoint, built once and never mutated.
    pub payload: ExtractRequest,
    /// Bound on the full request/response round trip.
    pub timeout: Duration,
    /// Where the returned document is persisted on success.
    pub output_path: PathBuf,
    /// Skip TLS certificate verification. Must be opted into explicitly;
    /// never enabled by default.
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extract_url: DEFAULT_EXTRACT_URL.to_string(),
            payload: ExtractRequest {
                gcs_uri: DEFAULT_GCS_URI.to_string(),
                meta: RequestMeta {
                    platform: DEFAULT_PLATFORM.to_string(),
                    language: DEFAULT_LANGUAGE.to_string(),
                    source_url: DEFAULT_SOURCE_URL.to_string(),
                },
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            accept_invalid_certs: false,
        }
    }
}
