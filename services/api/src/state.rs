use crate::config::Config;
use interviewer_core::{OpenAISessionClient, SessionCreator, SessionPreset};
use std::sync::Arc;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionCreator>,
    pub preset: SessionPreset,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionCreator>) -> Self {
        Self {
            sessions,
            preset: SessionPreset::INTERVIEWER,
        }
    }

    /// Wires the real OpenAI client from the startup configuration.
    pub fn from_config(config: Config) -> Self {
        let client =
            OpenAISessionClient::new(config.openai_api_key).with_base_url(&config.openai_base_url);
        Self::new(Arc::new(client))
    }
}
