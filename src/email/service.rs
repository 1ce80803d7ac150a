use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::email::types::{EmailMessage, MailConfig, SendEmailResponse};
use crate::error::ProviderError;

const PROVIDER: &str = "mail";

#[async_trait]
pub trait MailProvider: Send + Sync {
  async fn send_email(&self, message: &EmailMessage) -> Result<SendEmailResponse, ProviderError>;
}

/// HTTP client for the transactional email API.
pub struct EmailService {
  http: reqwest::Client,
  base_url: String,
  api_key: Option<SecretString>,
}

impl EmailService {
  pub fn new(http: reqwest::Client, config: &MailConfig) -> Self {
    EmailService {
      http,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
    }
  }
}

#[async_trait]
impl MailProvider for EmailService {
  async fn send_email(&self, message: &EmailMessage) -> Result<SendEmailResponse, ProviderError> {
    let key = self
      .api_key
      .as_ref()
      .ok_or(ProviderError::NotConfigured("RESEND_API_KEY"))?;

    let response = self
      .http
      .post(format!("{}/emails", self.base_url))
      .bearer_auth(key.expose_secret())
      .json(message)
      .send()
      .await
      .map_err(|e| ProviderError::transport(PROVIDER, e))?;

    let status = response.status();
    let bytes = response
      .bytes()
      .await
      .map_err(|e| ProviderError::transport(PROVIDER, e))?;

    // Error payloads come back with 4xx codes; keep them so the caller can surface the message.
    match serde_json::from_slice::<SendEmailResponse>(&bytes) {
      Ok(body) if status.is_success() || body.has_error() => Ok(body),
      Ok(_) => Err(ProviderError::Status {
        provider: PROVIDER,
        status: status.as_u16(),
      }),
      Err(_) if !status.is_success() => Err(ProviderError::Status {
        provider: PROVIDER,
        status: status.as_u16(),
      }),
      Err(e) => Err(ProviderError::Decode {
        provider: PROVIDER,
        reason: e.to_string(),
      }),
    }
  }
}
