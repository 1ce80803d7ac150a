use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::{
  domains::{address::rest::address_routes, mail::rest::mail_routes},
  middleware::{auth::auth_middleware, cors::cors_layer},
  state::SharedAppState,
};

/// The CORS layer sits outside the auth check, so `OPTIONS` preflights are answered
/// without an API key.
pub fn create_app(state: SharedAppState) -> Router {
  let api = address_routes()
    .merge(mail_routes())
    .route_layer(from_fn_with_state(state.clone(), auth_middleware));

  Router::new()
    .route("/", get(health_handler))
    .nest("/api", api)
    .layer(cors_layer(&state.access.allowed_origins))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}
