use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::{json, Value};

use crate::domains::{address::service::AddressServiceError, mail::service::MailServiceError};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub detail: Option<Value>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      detail: None,
    }
  }

  pub fn with_detail(mut self, detail: Value) -> Self {
    self.detail = Some(detail);
    self
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn bad_gateway(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_GATEWAY, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let mut body = json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    });
    if let Some(detail) = self.detail {
      body["detail"] = detail;
    }

    (self.status_code, Json(body)).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<AddressServiceError> for AppError {
  fn from(error: AddressServiceError) -> Self {
    match error {
      AddressServiceError::InvalidArgument(msg) => AppError::bad_request(msg),
      AddressServiceError::Upstream { status, message } => {
        tracing::warn!("Places upstream error: status={:?} message={}", status, message);
        AppError::bad_gateway("Places provider error").with_detail(json!({
          "upstreamStatus": status,
          "upstreamError": message,
        }))
      }
      AddressServiceError::Configuration(msg) => {
        AppError::internal_server_error(format!("Server misconfigured: {}", msg))
      }
    }
  }
}

impl From<MailServiceError> for AppError {
  fn from(error: MailServiceError) -> Self {
    match error {
      MailServiceError::InvalidArgument(msg) => AppError::bad_request(msg),
      MailServiceError::Configuration(msg) => AppError::internal_server_error(format!("Server misconfigured: {}", msg)),
    }
  }
}
