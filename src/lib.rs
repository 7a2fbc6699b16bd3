//! Single-shot fetcher for VDP (Video Data Package) extraction results.
//!
//! Sends one POST to a remote video-processing endpoint, waits out the
//! long server-side processing window, persists the returned document to
//! disk, and logs a defensive summary of its quality and hook-genome
//! fields. Strictly one attempt per run; no retries, no queueing.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
