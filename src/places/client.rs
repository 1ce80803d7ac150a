use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use super::types::{AutocompleteRequest, AutocompleteResponse, DetailsRequest, DetailsResponse, PlacesConfig};
use crate::error::ProviderError;

const PROVIDER: &str = "places";

#[async_trait]
pub trait PlacesProvider: Send + Sync {
  async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<AutocompleteResponse, ProviderError>;
  async fn place_details(&self, request: &DetailsRequest) -> Result<DetailsResponse, ProviderError>;
}

/// Google Places web service client. Holds no per-request state.
pub struct GooglePlacesClient {
  http: reqwest::Client,
  base_url: String,
  api_key: Option<SecretString>,
}

impl GooglePlacesClient {
  pub fn new(http: reqwest::Client, config: &PlacesConfig) -> Self {
    Self {
      http,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
    }
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ProviderError> {
    let key = self
      .api_key
      .as_ref()
      .ok_or(ProviderError::NotConfigured("GOOGLE_PLACES_KEY"))?;

    let response = self
      .http
      .get(format!("{}/{}", self.base_url, path))
      .query(query)
      .query(&[("key", key.expose_secret())])
      .send()
      .await
      .map_err(|e| ProviderError::transport(PROVIDER, e))?;

    let status = response.status();
    if !status.is_success() {
      return Err(ProviderError::Status {
        provider: PROVIDER,
        status: status.as_u16(),
      });
    }

    let bytes = response
      .bytes()
      .await
      .map_err(|e| ProviderError::transport(PROVIDER, e))?;

    serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode {
      provider: PROVIDER,
      reason: e.to_string(),
    })
  }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
  async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<AutocompleteResponse, ProviderError> {
    self
      .get_json(
        "autocomplete/json",
        &[
          ("input", request.input.as_str()),
          ("language", request.language.as_str()),
          ("components", request.components.as_str()),
          ("types", request.types.as_str()),
        ],
      )
      .await
  }

  async fn place_details(&self, request: &DetailsRequest) -> Result<DetailsResponse, ProviderError> {
    self
      .get_json(
        "details/json",
        &[
          ("place_id", request.place_id.as_str()),
          ("fields", request.fields.as_str()),
          ("language", request.language.as_str()),
        ],
      )
      .await
  }
}
