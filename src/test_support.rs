use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use secrecy::SecretString;
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::MailConfig,
  middleware::auth::API_KEY_HEADER,
  places::PlacesConfig,
  state::SharedAppState,
};

pub const TEST_API_KEY: &str = "test-mailer-key";

/// Serves `router` on an ephemeral loopback port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind stub upstream");
  let addr = listener.local_addr().expect("stub upstream address");
  tokio::spawn(async move {
    axum::serve(listener, router).await.expect("serve stub upstream");
  });
  format!("http://{}", addr)
}

pub fn test_config(places_base_url: &str, mail_base_url: &str) -> AppConfig {
  AppConfig {
    api_key: Some(SecretString::from(TEST_API_KEY)),
    places: PlacesConfig {
      api_key: Some(SecretString::from("places-key")),
      base_url: places_base_url.to_string(),
      ..PlacesConfig::default()
    },
    mail: MailConfig {
      api_key: Some(SecretString::from("re_test")),
      base_url: mail_base_url.to_string(),
      ..MailConfig::default()
    },
    ..AppConfig::default()
  }
}

pub fn app_with_config(config: &AppConfig) -> Router {
  let state = SharedAppState::new(config).expect("build app state");
  create_app(state)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .header(API_KEY_HEADER, TEST_API_KEY)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .header(API_KEY_HEADER, TEST_API_KEY)
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
