//! Configuration module
//!
//! The only tunable is the base URL the upload endpoint lives under;
//! no other environment variables affect behavior.

use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Client configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub backend_base_url: String,
}

impl Config {
    /// Read configuration from the environment: `PRINTQ_BACKEND_URL`,
    /// falling back to `BACKEND_URL`, then a localhost default.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let backend_base_url = env::var("PRINTQ_BACKEND_URL")
            .or_else(|_| env::var("BACKEND_URL"))
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let config = Config {
            backend_base_url: backend_base_url.trim_end_matches('/').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.backend_base_url.is_empty() {
            return Err(anyhow::anyhow!("Backend base URL must not be empty"));
        }
        if !self.backend_base_url.starts_with("http://")
            && !self.backend_base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "Backend base URL must start with http:// or https://"
            ));
        }
        Ok(())
    }
}
