use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Where the document-question-answering backend lives.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend base URL: {}", base_url))?;
        Ok(Self { base_url })
    }
}

/// Retry behavior for chat queries. Only transport failures are retried;
/// a backend that answers with an error status is taken at its word.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Extra attempts after the first try. Zero disables retrying.
    pub attempts: u32,
    /// Delay before each retry.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn disabled() -> Self {
        Self {
            attempts: 0,
            backoff: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_base_url() {
        assert!(BackendConfig::new("not a url").is_err());
        assert!(BackendConfig::new("http://localhost:8000").is_ok());
    }
}
