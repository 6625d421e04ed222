//! Breach range lookup
//!
//! Queries a k-anonymity range endpoint: only the first 5 hex characters of
//! the SHA-1 digest leave the process, and membership of the remaining 35 is
//! decided locally against the returned suffix list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{ConfigError, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com/range/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_USER_AGENT: &str = concat!("pwd-rules/", env!("CARGO_PKG_VERSION"));

const ENDPOINT_VAR: &str = "PWD_BREACH_ENDPOINT";
const TIMEOUT_VAR: &str = "PWD_BREACH_TIMEOUT_MS";

/// Length of the digest prefix sent over the network.
pub const PREFIX_LEN: usize = 5;
/// Length of the digest suffix compared locally.
pub const SUFFIX_LEN: usize = 35;

/// Transport used by the breach rule to fetch the suffix list for a prefix.
#[async_trait]
pub trait RangeClient: Send + Sync {
    /// Returns the raw response body for `prefix`.
    async fn fetch_range(&self, prefix: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Ask the server to pad responses with zero-count decoy records.
    pub add_padding: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            add_padding: false,
        }
    }
}

impl RangeConfig {
    /// Builds the configuration from defaults plus environment overrides.
    ///
    /// Priority:
    /// 1. Environment variables `PWD_BREACH_ENDPOINT` and `PWD_BREACH_TIMEOUT_MS`
    /// 2. Defaults (`https://api.pwnedpasswords.com/range/`, 5 seconds)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeout` if the timeout variable is not a
    /// positive number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            if millis == 0 {
                return Err(ConfigError::InvalidTimeout(raw));
            }
            config.timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Full URL for a digest prefix. A trailing `/` on the endpoint is tolerated.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), prefix)
    }
}

/// `RangeClient` over HTTP.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpRangeClient {
    client: reqwest::Client,
    config: RangeConfig,
}

impl HttpRangeClient {
    pub fn new(config: RangeConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }
}

#[async_trait]
impl RangeClient for HttpRangeClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, TransportError> {
        let mut request = self.client.get(self.config.range_url(prefix));
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await.inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "Breach range request failed");
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), "Breach range endpoint returned non-OK status");
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// One `SUFFIX:COUNT` record of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

/// Parses a range response body.
///
/// Accepts `\n` or `\r\n` line endings and skips blank lines.
///
/// # Errors
///
/// Returns `TransportError::MalformedBody` for any line that is not a
/// 35-character hex suffix followed by `:` and a decimal count.
pub fn parse_range(body: &str) -> Result<Vec<RangeEntry>, TransportError> {
    let mut entries = Vec::new();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (suffix, count) = line
            .split_once(':')
            .ok_or_else(|| TransportError::MalformedBody(format!("missing ':' in {line:?}")))?;

        if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TransportError::MalformedBody(format!(
                "invalid suffix {suffix:?}"
            )));
        }

        let count = count
            .trim()
            .parse()
            .map_err(|_| TransportError::MalformedBody(format!("invalid count {count:?}")))?;

        entries.push(RangeEntry {
            suffix: suffix.to_string(),
            count,
        });
    }

    Ok(entries)
}
