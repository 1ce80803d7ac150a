use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceSuggestion {
  pub id: String,
  pub label: String,
}

/// Canonical address shape. Every field is always present, empty when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
  pub unit_number: String,
  pub street_number: String,
  pub street_name: String,
  pub street_type: String,
  pub suburb: String,
  pub state: String,
  pub postcode: String,
  pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
  pub lat: f64,
  pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResolvedAddress {
  pub id: String,
  pub label: String,
  pub components: AddressComponents,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<Coordinates>,
}

/// Autocomplete envelope. A degraded lookup still succeeds: the suggestions are empty
/// and the upstream status/message ride along for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResult {
  pub suggestions: Vec<PlaceSuggestion>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub upstream_status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub upstream_error: Option<String>,
}

impl AutocompleteResult {
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn degraded(upstream_status: Option<String>, upstream_error: Option<String>) -> Self {
    AutocompleteResult {
      suggestions: Vec::new(),
      upstream_status,
      upstream_error,
    }
  }

  pub fn is_degraded(&self) -> bool {
    self.upstream_status.is_some() || self.upstream_error.is_some()
  }
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
  pub q: Option<String>,
  pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
  pub id: Option<String>,
  pub label: Option<String>,
}
