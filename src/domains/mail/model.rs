use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validate_not_blank;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SendEmailRequest {
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub to: String,
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub subject: String,
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub html: String,
}

/// Outcome of a dispatch: either sent (with the provider id when one was returned)
/// or failed with a message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DispatchResult {
  ok: bool,
  id: Option<String>,
  error: Option<String>,
}

impl DispatchResult {
  pub fn sent(id: Option<String>) -> Self {
    DispatchResult {
      ok: true,
      id,
      error: None,
    }
  }

  pub fn failed(message: impl Into<String>) -> Self {
    DispatchResult {
      ok: false,
      id: None,
      error: Some(message.into()),
    }
  }

  pub fn is_ok(&self) -> bool {
    self.ok
  }

  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }
}
