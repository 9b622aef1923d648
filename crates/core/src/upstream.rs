use crate::error::SessionError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use openai_realtime_types::SessionConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

pub const BASE_URL: &str = "https://api.openai.com/v1";
pub const SESSIONS_PATH: &str = "/realtime/sessions";

// `SessionCreator` is the seam between request handling and the network.
// The HTTP layer only holds an `Arc<dyn SessionCreator>`, and tests swap in
// `MockSessionCreator` or point the real client at a local mock server.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionCreator: Send + Sync {
    /// Asks the upstream for a new realtime session and returns its JSON as-is.
    async fn create_session(&self, config: &SessionConfig) -> Result<Value, SessionError>;
}

/// Creates sessions through `POST {base_url}/realtime/sessions`.
pub struct OpenAISessionClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAISessionClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SESSIONS_PATH)
    }
}

#[async_trait]
impl SessionCreator for OpenAISessionClient {
    async fn create_session(&self, config: &SessionConfig) -> Result<Value, SessionError> {
        let endpoint = self.endpoint();
        tracing::debug!("POST {} model={}", endpoint, config.model());

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(config)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!("upstream rejected session request with {}", status);
            return Err(SessionError::Upstream(text));
        }

        Ok(response.json::<Value>().await?)
    }
}
