use std::str::FromStr;
use std::time::Duration;

use dotenv::dotenv;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const BASE_URL_VAR: &str = "API_URL";

/// Transport settings shared by every request the client sends.
///
/// `Content-Type: application/json` is not a default header; it is set per
/// request, only when a JSON body is attached.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers,
        }
    }
}

impl ClientConfig {
    /// Reads `API_URL` from the process environment (or a `.env` file).
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::default().with_base_url(&url),
            None => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigError> {
        let header_name = HeaderName::from_str(name).map_err(|e| ConfigError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Joins an endpoint path (always starting with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
