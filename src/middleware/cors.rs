use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::auth::API_KEY_HEADER;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Echoes `Access-Control-Allow-Origin` only for listed origins; `Vary: Origin` is always set.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = allowed_origins
    .iter()
    .filter_map(|origin| match HeaderValue::from_str(origin) {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!("Ignoring invalid allowed origin {:?}", origin);
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
    .max_age(PREFLIGHT_MAX_AGE)
}
