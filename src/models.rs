//! Data models and structures
//!
//! Defines the request payload sent to the extraction endpoint and the
//! defensive summary views read out of the returned VDP document. The
//! document itself stays an untyped `serde_json::Value` so it can be
//! persisted verbatim; only the summary fields get typed views.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(rename = "gcsUri")]
    pub gcs_uri: String,
    pub meta: RequestMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMeta {
    pub platform: String,
    pub language: String,
    pub source_url: String,
}

/// Parsed response document plus the byte length of the body it came
/// from, kept for the summary line.
#[derive(Debug, Clone)]
pub struct VdpDocument {
    pub body: Value,
    pub body_bytes: usize,
}

/// Quality metrics block (`google_vdp_quality`). The service may omit
/// the block or any field in it; absence displays as `0` but is kept as
/// `None` here so it is never mistaken for a real zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualityReport {
    pub scenes_count: Option<u64>,
    pub shots_count: Option<u64>,
    pub keyframes_count: Option<u64>,
    pub composition_notes: Option<u64>,
}

/// Hook analysis block (`hook_genome`). Missing fields display as
/// `"unknown"` (pattern) or `0` (score and timestamps).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookGenome {
    pub pattern_code: Option<String>,
    pub strength_score: Option<f64>,
    pub start_sec: Option<f64>,
    pub end_sec: Option<f64>,
}

/// Display summary extracted from a VDP document. The `Option` fields
/// preserve what the server actually sent; the accessor methods apply
/// the display-only defaults.
#[derive(Debug, Clone, Default)]
pub struct VdpSummary {
    pub quality: Option<QualityReport>,
    pub hook: Option<HookGenome>,
    pub vdp_content_id: Option<String>,
    pub body_bytes: usize,
}

impl VdpSummary {
    /// Pulls the summary out of a raw document. Absent or malformed
    /// sections degrade to `None`, never to an error.
    pub fn from_document(document: &VdpDocument) -> Self {
        let quality = document
            .body
            .get("google_vdp_quality")
            .and_then(|block| serde_json::from_value(block.clone()).ok());
        let hook = document
            .body
            .get("hook_genome")
            .and_then(|block| serde_json::from_value(block.clone()).ok());
        let vdp_content_id = document
            .body
            .get("vdp")
            .and_then(|vdp| vdp.get("content_id"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            quality,
            hook,
            vdp_content_id,
            body_bytes: document.body_bytes,
        }
    }

    pub fn scenes_count(&self) -> u64 {
        self.quality.as_ref().and_then(|q| q.scenes_count).unwrap_or(0)
    }

    pub fn shots_count(&self) -> u64 {
        self.quality.as_ref().and_then(|q| q.shots_count).unwrap_or(0)
    }

    pub fn keyframes_count(&self) -> u64 {
        self.quality.as_ref().and_then(|q| q.keyframes_count).unwrap_or(0)
    }

    pub fn composition_notes(&self) -> u64 {
        self.quality
            .as_ref()
            .and_then(|q| q.composition_notes)
            .unwrap_or(0)
    }

    pub fn pattern_code(&self) -> &str {
        self.hook
            .as_ref()
            .and_then(|h| h.pattern_code.as_deref())
            .unwrap_or("unknown")
    }

    pub fn strength_score(&self) -> f64 {
        self.hook.as_ref().and_then(|h| h.strength_score).unwrap_or(0.0)
    }

    pub fn start_sec(&self) -> f64 {
        self.hook.as_ref().and_then(|h| h.start_sec).unwrap_or(0.0)
    }

    pub fn end_sec(&self) -> f64 {
        self.hook.as_ref().and_then(|h| h.end_sec).unwrap_or(0.0)
    }

    pub fn content_id(&self) -> &str {
        self.vdp_content_id.as_deref().unwrap_or("unknown")
    }
}
