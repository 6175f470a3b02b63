pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod youtube;

use std::sync::Arc;
use config::Config;
use youtube::TranscriptFetcher;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub transcripts: TranscriptFetcher,
}
