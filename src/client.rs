//! HTTP client for the VDP extraction endpoint
//!
//! One transport, one attempt: a reqwest POST bounded by the configured
//! round-trip timeout. Failures are classified here so the caller can
//! report timeouts, network faults, and rejected statuses distinctly.

use crate::config::Config;
use crate::models::{ExtractRequest, VdpDocument};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

pub struct VdpClient {
    client: Client,
    extract_url: String,
    timeout: Duration,
}

impl VdpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::Generic(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::new_with_client(config, client))
    }

    pub fn new_with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            extract_url: config.extract_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Sends the extraction request and returns the parsed response
    /// document. Strictly single-attempt; the timeout bounds the full
    /// round trip including the response body.
    pub async fn extract(&self, request: &ExtractRequest) -> Result<VdpDocument> {
        let response = self
            .client
            .post(&self.extract_url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        tracing::info!("Extraction endpoint answered with status {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        if status != StatusCode::OK {
            tracing::error!("Extraction endpoint error (status {}): {}", status, body);
            return Err(Error::HttpStatus { status, body });
        }

        let body_bytes = body.len();
        let document: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse extraction response: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })?;

        Ok(VdpDocument {
            body: document,
            body_bytes,
        })
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            tracing::error!(
                "No response from extraction endpoint within {:?}",
                self.timeout
            );
            Error::Timeout(self.timeout)
        } else {
            tracing::error!("Failed to reach extraction endpoint: {}", err);
            Error::Network(err)
        }
    }
}
