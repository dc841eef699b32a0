use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portfolio API, without a trailing path.
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_url = std::env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        reqwest::Url::parse(&api_url)
            .with_context(|| format!("PORTFOLIO_API_URL '{api_url}' is not a valid URL"))?;

        Ok(ClientConfig { api_url })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
        }
    }
}
