//! Runtime configuration, read from the environment (`.env` is loaded by `main`).

use std::time::Duration;

use secrecy::SecretString;

use crate::{email::MailConfig, error::ConfigError, places::PlacesConfig};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Front-end origins allowed to call the API when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
  "http://localhost:19007",
  "http://localhost:19006",
  "http://localhost:8081",
  "https://ks-mailer-zodm.vercel.app",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub bind_addr: String,
  /// Shared secret expected in `x-api-key`.
  pub api_key: Option<SecretString>,
  pub allowed_origins: Vec<String>,
  /// Per-call deadline for upstream requests. Unset means none is applied.
  pub upstream_timeout: Option<Duration>,
  pub places: PlacesConfig,
  pub mail: MailConfig,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      api_key: None,
      allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
      upstream_timeout: None,
      places: PlacesConfig::default(),
      mail: MailConfig::default(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the config from an arbitrary key lookup. Blank values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let secret = |key: &str| var(key).map(SecretString::from);
    let defaults = AppConfig::default();

    let allowed_origins = match var("ALLOWED_ORIGINS") {
      Some(raw) => raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect(),
      None => defaults.allowed_origins,
    };

    let upstream_timeout = var("UPSTREAM_TIMEOUT_SECS")
      .map(|raw| {
        raw
          .parse::<u64>()
          .ok()
          .filter(|secs| *secs > 0)
          .map(Duration::from_secs)
          .ok_or_else(|| ConfigError::InvalidValue {
            key: "UPSTREAM_TIMEOUT_SECS".to_string(),
            message: format!("expected a positive number of seconds, got {:?}", raw),
          })
      })
      .transpose()?;

    let places = PlacesConfig {
      api_key: secret("GOOGLE_PLACES_KEY"),
      base_url: var("PLACES_BASE_URL").unwrap_or(defaults.places.base_url),
      language: var("PLACES_LANGUAGE").unwrap_or(defaults.places.language),
      default_country: var("PLACES_COUNTRY").unwrap_or(defaults.places.default_country),
      fallback_country: var("PLACES_FALLBACK_COUNTRY").unwrap_or(defaults.places.fallback_country),
    };

    let mail = MailConfig {
      api_key: secret("RESEND_API_KEY"),
      base_url: var("MAIL_BASE_URL").unwrap_or(defaults.mail.base_url),
      from_email: var("MAIL_FROM").unwrap_or(defaults.mail.from_email),
      reply_to: var("MAIL_REPLY_TO"),
    };

    Ok(AppConfig {
      bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
      api_key: secret("MAILER_KEY"),
      allowed_origins,
      upstream_timeout,
      places,
      mail,
    })
  }

  /// Logs which credentials are missing. Values are never printed.
  pub fn warn_missing_credentials(&self) {
    let credentials = [
      ("MAILER_KEY", self.api_key.is_some()),
      ("GOOGLE_PLACES_KEY", self.places.api_key.is_some()),
      ("RESEND_API_KEY", self.mail.api_key.is_some()),
    ];
    for (name, present) in credentials {
      if !present {
        tracing::warn!("{} is not set; dependent routes will answer 500", name);
      }
    }
  }
}
