use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAIL_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_MAIL_FROM: &str = "KS Mailer <onboarding@resend.dev>";

#[derive(Debug, Clone)]
pub struct MailConfig {
  pub api_key: Option<SecretString>,
  pub base_url: String,
  pub from_email: String,
  pub reply_to: Option<String>,
}

impl Default for MailConfig {
  fn default() -> Self {
    MailConfig {
      api_key: None,
      base_url: DEFAULT_MAIL_BASE_URL.to_string(),
      from_email: DEFAULT_MAIL_FROM.to_string(),
      reply_to: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,
}

impl EmailMessage {
  pub fn new(from: String, to: Vec<String>, subject: String, html: String) -> Self {
    EmailMessage {
      from,
      to,
      subject,
      html,
      reply_to: None,
    }
  }

  pub fn with_reply_to(mut self, reply_to: Option<String>) -> Self {
    self.reply_to = reply_to;
    self
  }
}

/// Provider reply. Which fields are populated depends on the outcome: the SDK-style
/// envelope nests `data.id` or `error.message`, while the raw HTTP API answers with a
/// bare `id` on success and a bare `message` on failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SendEmailResponse {
  pub data: Option<SentEmail>,
  pub error: Option<EmailError>,
  pub id: Option<String>,
  pub message: Option<String>,
}

impl SendEmailResponse {
  pub fn has_error(&self) -> bool {
    self.error.is_some() || (self.data.is_none() && self.id.is_none() && self.message.is_some())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentEmail {
  pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmailError {
  pub message: Option<String>,
  pub name: Option<String>,
}
