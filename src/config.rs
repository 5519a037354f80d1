//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// `POSTBOARD_API_URL`, reported at startup. The browser bundle reads
    /// the same variable at build time.
    pub api_url: Option<String>,
}

impl HostConfig {
    /// Optional:
    /// - `PORT`: default 3000
    /// - `POSTBOARD_API_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("POSTBOARD_API_URL").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        Ok(Self { port, api_url })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
