use axum::{
  extract::{Json, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::model::{DispatchResult, SendEmailRequest};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/send-inspection-email", post(send_email_handler))
}

/// A failed dispatch is still a well-formed envelope; it goes out with 502.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendEmailRequest>,
) -> Result<(StatusCode, JsonResponse<DispatchResult>), AppError> {
  let result = state.send_email(payload).await?;
  let status = if result.is_ok() {
    StatusCode::OK
  } else {
    StatusCode::BAD_GATEWAY
  };

  Ok((status, JsonResponse(result)))
}
