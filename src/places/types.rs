use secrecy::SecretString;
use serde::Deserialize;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Debug, Clone)]
pub struct PlacesConfig {
  pub api_key: Option<SecretString>,
  pub base_url: String,
  pub language: String,
  pub default_country: String,
  pub fallback_country: String,
}

impl Default for PlacesConfig {
  fn default() -> Self {
    PlacesConfig {
      api_key: None,
      base_url: DEFAULT_PLACES_BASE_URL.to_string(),
      language: "en-AU".to_string(),
      default_country: "au".to_string(),
      fallback_country: "Australia".to_string(),
    }
  }
}

/// Query sent to the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
  pub input: String,
  pub components: String,
  pub language: String,
  pub types: String,
}

/// Query sent to the details endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
  pub place_id: String,
  pub fields: String,
  pub language: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AutocompleteResponse {
  pub status: String,
  #[serde(default)]
  pub predictions: Vec<Prediction>,
  pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Prediction {
  pub place_id: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DetailsResponse {
  pub status: String,
  pub result: Option<PlaceResult>,
  pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlaceResult {
  #[serde(default)]
  pub address_components: Vec<AddressComponent>,
  pub formatted_address: Option<String>,
  pub name: Option<String>,
  pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AddressComponent {
  #[serde(default)]
  pub long_name: String,
  #[serde(default)]
  pub short_name: String,
  #[serde(default)]
  pub types: Vec<String>,
}

impl AddressComponent {
  pub fn has_type(&self, tag: &str) -> bool {
    self.types.iter().any(|t| t == tag)
  }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Geometry {
  pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct Location {
  pub lat: f64,
  pub lng: f64,
}
