use axum::{
  extract::{Request, State},
  http::HeaderMap,
  middleware::Next,
  response::Response,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{state::SharedAppState, utils::error::AppError, utils::secret_matches};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Who may call the API: the shared secret plus the browser origins allowed by CORS.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
  pub api_key: Option<SecretString>,
  pub allowed_origins: Vec<String>,
}

pub async fn auth_middleware(
  State(state): State<SharedAppState>,
  request: Request,
  next: Next,
) -> Result<Response, AppError> {
  authorize(&state.access, request.headers())?;

  Ok(next.run(request).await)
}

pub fn authorize(policy: &AccessPolicy, headers: &HeaderMap) -> Result<(), AppError> {
  let expected = policy
    .api_key
    .as_ref()
    .ok_or_else(|| AppError::internal_server_error("Server misconfigured: MAILER_KEY missing"))?;

  let provided = headers
    .get(API_KEY_HEADER)
    .and_then(|value| value.to_str().ok())
    .unwrap_or_default();

  if !secret_matches(expected.expose_secret(), provided) {
    return Err(AppError::unauthorized("Unauthorized"));
  }

  Ok(())
}
