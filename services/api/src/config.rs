use interviewer_core::upstream::BASE_URL;
use secrecy::SecretString;
use std::net::{IpAddr, SocketAddr};

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// This function will look for a `.env` file in the current directory
    /// and load the following variables:
    ///
    /// *   `OPENAI_API_KEY`: Bearer credential for the session endpoint. Required.
    /// *   `PORT`: (Optional) The port to listen on. Defaults to 3000.
    /// *   `BIND_HOST`: (Optional) The address to listen on. Defaults to "0.0.0.0".
    /// *   `OPENAI_BASE_URL`: (Optional) Upstream API root. Defaults to "https://api.openai.com/v1".
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar("OPENAI_API_KEY".to_string()))?;

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(port_str) => port_str
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), e.to_string()))?,
            None => 3000,
        };

        let host_str = lookup("BIND_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_HOST".to_string(), e.to_string()))?;

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| BASE_URL.to_string());

        Ok(Self {
            bind_address: SocketAddr::new(host, port),
            openai_api_key: SecretString::from(openai_api_key),
            openai_base_url,
        })
    }
}
