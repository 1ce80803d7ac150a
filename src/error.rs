//! Errors shared by the upstream clients and the configuration loader.

/// Failure talking to an upstream provider.
///
/// Transport errors are stored with their URL stripped: the places key travels in
/// the query string and must never reach a log line or a response body.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
  #[error("{0} is not configured")]
  NotConfigured(&'static str),

  #[error("{provider} request failed: {source}")]
  Transport {
    provider: &'static str,
    #[source]
    source: reqwest::Error,
  },

  #[error("{provider} responded with HTTP {status}")]
  Status { provider: &'static str, status: u16 },

  #[error("{provider} returned an unreadable response: {reason}")]
  Decode { provider: &'static str, reason: String },
}

impl ProviderError {
  pub fn transport(provider: &'static str, err: reqwest::Error) -> Self {
    ProviderError::Transport {
      provider,
      source: err.without_url(),
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid configuration value for {key}: {message}")]
  InvalidValue { key: String, message: String },

  #[error("Failed to build HTTP client: {0}")]
  HttpClient(#[from] reqwest::Error),
}
