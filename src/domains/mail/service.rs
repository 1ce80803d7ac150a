use async_trait::async_trait;
use validator::Validate;

use super::model::{DispatchResult, SendEmailRequest};
use crate::{
  email::{EmailMessage, MailConfig, MailProvider, SendEmailResponse},
  error::ProviderError,
};

const UNKNOWN_PROVIDER_ERROR: &str = "Email provider rejected the message";

#[derive(Debug, thiserror::Error)]
pub enum MailServiceError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Configuration error: {0}")]
  Configuration(String),
}

#[async_trait]
pub trait MailDispatcher: Send + Sync {
  async fn send(&self, to: &str, subject: &str, html: &str) -> Result<DispatchResult, MailServiceError>;
}

/// Fixed sender identity attached to every outgoing message.
#[derive(Debug, Clone)]
pub struct SenderIdentity {
  pub from: String,
  pub reply_to: Option<String>,
}

impl From<&MailConfig> for SenderIdentity {
  fn from(config: &MailConfig) -> Self {
    SenderIdentity {
      from: config.from_email.clone(),
      reply_to: config.reply_to.clone(),
    }
  }
}

pub struct MailDispatcherImpl<M> {
  provider: M,
  sender: SenderIdentity,
}

impl<M> MailDispatcherImpl<M>
where
  M: MailProvider,
{
  pub fn new(provider: M, sender: SenderIdentity) -> Self {
    Self { provider, sender }
  }
}

#[async_trait]
impl<M> MailDispatcher for MailDispatcherImpl<M>
where
  M: MailProvider,
{
  async fn send(&self, to: &str, subject: &str, html: &str) -> Result<DispatchResult, MailServiceError> {
    let request = SendEmailRequest {
      to: to.trim().to_string(),
      subject: subject.to_string(),
      html: html.to_string(),
    };
    request
      .validate()
      .map_err(|e| MailServiceError::InvalidArgument(format!("Validation failed: {}", e)))?;

    let message = EmailMessage::new(self.sender.from.clone(), vec![request.to], request.subject, request.html)
      .with_reply_to(self.sender.reply_to.clone());

    let result = match self.provider.send_email(&message).await {
      Ok(response) => map_dispatch(response),
      Err(ProviderError::NotConfigured(var)) => {
        return Err(MailServiceError::Configuration(format!("{} missing", var)));
      }
      Err(e) => DispatchResult::failed(e.to_string()),
    };

    match result.error() {
      None => tracing::info!("Email dispatched: id={:?}", result.id()),
      Some(err) => tracing::warn!("Email dispatch failed: {}", err),
    }

    Ok(result)
  }
}

/// Maps whichever reply shape the provider used onto a `DispatchResult`.
pub fn map_dispatch(response: SendEmailResponse) -> DispatchResult {
  if let Some(error) = response.error {
    return DispatchResult::failed(error.message.unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string()));
  }
  if let Some(data) = response.data {
    return DispatchResult::sent(data.id);
  }
  if response.id.is_some() {
    return DispatchResult::sent(response.id);
  }
  match response.message {
    Some(message) => DispatchResult::failed(message),
    None => DispatchResult::sent(None),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  mockall::mock! {
    pub Mailer {}

    #[async_trait]
    impl MailProvider for Mailer {
      async fn send_email(&self, message: &EmailMessage) -> Result<SendEmailResponse, ProviderError>;
    }
  }

  fn sender() -> SenderIdentity {
    SenderIdentity {
      from: "KS Mailer <noreply@example.com>".to_string(),
      reply_to: Some("office@example.com".to_string()),
    }
  }

  fn reply(value: serde_json::Value) -> SendEmailResponse {
    serde_json::from_value(value).expect("provider reply")
  }

  #[tokio::test]
  async fn test_send_success_maps_data_id() {
    let mut provider = MockMailer::new();
    provider
      .expect_send_email()
      .withf(|message| {
        message.from == "KS Mailer <noreply@example.com>"
          && message.to == vec!["inspector@example.com".to_string()]
          && message.subject == "Inspection report"
          && message.html == "<p>All clear</p>"
          && message.reply_to.as_deref() == Some("office@example.com")
      })
      .times(1)
      .returning(|_| Ok(reply(json!({"data": {"id": "abc123"}}))));

    let dispatcher = MailDispatcherImpl::new(provider, sender());
    let result = dispatcher
      .send("inspector@example.com", "Inspection report", "<p>All clear</p>")
      .await
      .expect("send");

    assert_eq!(result, DispatchResult::sent(Some("abc123".to_string())));
    assert!(result.is_ok());
    assert_eq!(result.error(), None);
  }

  #[tokio::test]
  async fn test_send_error_payload_maps_to_failure() {
    let mut provider = MockMailer::new();
    provider
      .expect_send_email()
      .times(1)
      .returning(|_| Ok(reply(json!({"error": {"message": "invalid recipient"}}))));

    let dispatcher = MailDispatcherImpl::new(provider, sender());
    let result = dispatcher
      .send("nobody", "Inspection report", "<p>All clear</p>")
      .await
      .expect("failure is a result, not an error");

    assert_eq!(
      serde_json::to_value(&result).unwrap(),
      json!({"ok": false, "id": null, "error": "invalid recipient"})
    );
  }

  #[tokio::test]
  async fn test_send_transport_fault_maps_to_failure() {
    let mut provider = MockMailer::new();
    provider.expect_send_email().times(1).returning(|_| {
      Err(ProviderError::Status {
        provider: "mail",
        status: 500,
      })
    });

    let dispatcher = MailDispatcherImpl::new(provider, sender());
    let result = dispatcher.send("a@example.com", "s", "h").await.expect("send");

    assert!(!result.is_ok());
    assert_eq!(result.id(), None);
    assert_eq!(result.error(), Some("mail responded with HTTP 500"));
  }

  #[tokio::test]
  async fn test_send_blank_arguments_make_no_upstream_call() {
    // No expectations: any provider call panics.
    let dispatcher = MailDispatcherImpl::new(MockMailer::new(), sender());

    for (to, subject, html) in [("", "s", "h"), ("a@example.com", " ", "h"), ("a@example.com", "s", "")] {
      let result = dispatcher.send(to, subject, html).await;
      assert!(matches!(result, Err(MailServiceError::InvalidArgument(_))));
    }
  }

  #[tokio::test]
  async fn test_send_missing_key_is_configuration_error() {
    let mut provider = MockMailer::new();
    provider
      .expect_send_email()
      .times(1)
      .returning(|_| Err(ProviderError::NotConfigured("RESEND_API_KEY")));

    let dispatcher = MailDispatcherImpl::new(provider, sender());
    let result = dispatcher.send("a@example.com", "s", "h").await;
    assert!(matches!(result, Err(MailServiceError::Configuration(msg)) if msg == "RESEND_API_KEY missing"));
  }

  #[test]
  fn test_map_dispatch_shapes() {
    assert_eq!(
      map_dispatch(reply(json!({"id": "raw-1"}))),
      DispatchResult::sent(Some("raw-1".to_string()))
    );
    assert_eq!(
      map_dispatch(reply(json!({"statusCode": 403, "name": "validation_error", "message": "domain not verified"}))),
      DispatchResult::failed("domain not verified")
    );
    assert_eq!(map_dispatch(reply(json!({"data": {}}))), DispatchResult::sent(None));
    assert_eq!(map_dispatch(reply(json!({}))), DispatchResult::sent(None));
    assert_eq!(
      map_dispatch(reply(json!({"data": null, "error": {"name": "internal_server_error"}}))),
      DispatchResult::failed(UNKNOWN_PROVIDER_ERROR)
    );
  }
}
