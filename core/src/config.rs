//! Construction-time settings for `Client`.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const TOKEN_ENV: &str = "THE_ONE_TOKEN";
pub const BASE_URL_ENV: &str = "THE_ONE_BASE_URL";
pub const TIMEOUT_ENV: &str = "THE_ONE_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) token: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// Read the token from `THE_ONE_TOKEN`, with optional `THE_ONE_BASE_URL`
    /// and `THE_ONE_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self, ApiError> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|e| ApiError::Config(format!("{TOKEN_ENV}: {e}")))?;
        let mut config = Self::new(token);

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(&base_url);
        }
        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| ApiError::Config(format!("{TIMEOUT_ENV}={secs:?}: {e}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip TLS certificate verification. Only for talking to test servers
    /// with self-signed certificates.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

// Keeps the bearer token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
