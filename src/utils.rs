use std::time::Duration;

use sha2::{Digest, Sha256};
use validator::ValidationError;

pub mod error;

/// Compares two secrets through their SHA-256 digests so neither the length nor a
/// matching prefix of the expected value is observable.
pub fn secret_matches(expected: &str, provided: &str) -> bool {
  Sha256::digest(expected.as_bytes()) == Sha256::digest(provided.as_bytes())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank").with_message("must not be empty".into()));
  }

  Ok(())
}

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

/// The one outbound HTTP client, built at startup and shared by both providers.
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
  let mut builder = reqwest::Client::builder().user_agent(concat!("ks-mailer-api/", env!("CARGO_PKG_VERSION")));
  if let Some(timeout) = timeout {
    builder = builder.timeout(timeout);
  }
  builder.build()
}
