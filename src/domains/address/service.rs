use async_trait::async_trait;

use super::model::{AddressComponents, AutocompleteResult, Coordinates, PlaceSuggestion, ResolvedAddress};
use crate::{
  error::ProviderError,
  places::{AddressComponent, AutocompleteRequest, DetailsRequest, PlacesConfig, PlacesProvider, Prediction},
  utils::non_blank,
};

/// Minimal field mask for details lookups; billing is per field group.
pub const DETAILS_FIELDS: &[&str] = &["address_component", "formatted_address", "geometry/location", "name"];

const AUTOCOMPLETE_TYPES: &str = "geocode";
const STATUS_OK: &str = "OK";

#[derive(Debug, thiserror::Error)]
pub enum AddressServiceError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Upstream error ({}): {message}", .status.as_deref().unwrap_or("no status"))]
  Upstream { status: Option<String>, message: String },

  #[error("Configuration error: {0}")]
  Configuration(String),
}

impl From<ProviderError> for AddressServiceError {
  fn from(err: ProviderError) -> Self {
    match err {
      ProviderError::NotConfigured(var) => AddressServiceError::Configuration(format!("{} missing", var)),
      other => AddressServiceError::Upstream {
        status: None,
        message: other.to_string(),
      },
    }
  }
}

#[async_trait]
pub trait AddressResolver: Send + Sync {
  async fn autocomplete(&self, query: &str, region: Option<&str>) -> Result<AutocompleteResult, AddressServiceError>;
  async fn resolve_details(
    &self,
    place_id: &str,
    label_override: Option<&str>,
  ) -> Result<ResolvedAddress, AddressServiceError>;
}

#[derive(Debug, Clone)]
pub struct ResolverSettings {
  pub language: String,
  pub default_country: String,
  pub fallback_country: String,
}

impl From<&PlacesConfig> for ResolverSettings {
  fn from(config: &PlacesConfig) -> Self {
    ResolverSettings {
      language: config.language.clone(),
      default_country: config.default_country.clone(),
      fallback_country: config.fallback_country.clone(),
    }
  }
}

pub struct AddressResolverImpl<P> {
  provider: P,
  settings: ResolverSettings,
}

impl<P> AddressResolverImpl<P>
where
  P: PlacesProvider,
{
  pub fn new(provider: P, settings: ResolverSettings) -> Self {
    Self { provider, settings }
  }

  /// Builds the `components` filter, e.g. `"au,nz"` -> `country:au|country:nz`.
  fn region_components(&self, region: Option<&str>) -> String {
    let codes = |raw: &str| -> Vec<String> {
      raw
        .split(',')
        .map(|code| code.trim().trim_start_matches("country:").to_ascii_lowercase())
        .filter(|code| !code.is_empty())
        .map(|code| format!("country:{}", code))
        .collect()
    };

    let mut filter = codes(non_blank(region).unwrap_or_default());
    if filter.is_empty() {
      filter = codes(&self.settings.default_country);
    }
    filter.join("|")
  }
}

#[async_trait]
impl<P> AddressResolver for AddressResolverImpl<P>
where
  P: PlacesProvider,
{
  async fn autocomplete(&self, query: &str, region: Option<&str>) -> Result<AutocompleteResult, AddressServiceError> {
    let query = query.trim();
    if query.is_empty() {
      return Ok(AutocompleteResult::empty());
    }

    let request = AutocompleteRequest {
      input: query.to_string(),
      components: self.region_components(region),
      language: self.settings.language.clone(),
      types: AUTOCOMPLETE_TYPES.to_string(),
    };

    match self.provider.autocomplete(&request).await {
      Ok(response) if response.status == STATUS_OK => Ok(AutocompleteResult {
        suggestions: to_suggestions(response.predictions),
        ..AutocompleteResult::empty()
      }),
      Ok(response) => {
        tracing::warn!("Places autocomplete degraded: status={}", response.status);
        Ok(AutocompleteResult::degraded(Some(response.status), response.error_message))
      }
      Err(ProviderError::NotConfigured(var)) => Err(AddressServiceError::Configuration(format!("{} missing", var))),
      Err(e) => {
        tracing::warn!("Places autocomplete unavailable: {}", e);
        Ok(AutocompleteResult::degraded(None, Some(e.to_string())))
      }
    }
  }

  async fn resolve_details(
    &self,
    place_id: &str,
    label_override: Option<&str>,
  ) -> Result<ResolvedAddress, AddressServiceError> {
    let place_id = place_id.trim();
    if place_id.is_empty() {
      return Err(AddressServiceError::InvalidArgument("Missing id (place_id)".to_string()));
    }

    let request = DetailsRequest {
      place_id: place_id.to_string(),
      fields: DETAILS_FIELDS.join(","),
      language: self.settings.language.clone(),
    };

    let response = self.provider.place_details(&request).await?;
    if response.status != STATUS_OK {
      return Err(AddressServiceError::Upstream {
        message: response
          .error_message
          .unwrap_or_else(|| "Places details lookup failed".to_string()),
        status: Some(response.status),
      });
    }

    let result = response.result.unwrap_or_default();
    let components = extract_components(&result.address_components, &self.settings.fallback_country);
    let location = result
      .geometry
      .and_then(|g| g.location)
      .map(|l| Coordinates { lat: l.lat, lng: l.lng });

    let label = label_override
      .filter(|l| !l.trim().is_empty())
      .map(str::to_string)
      .or(result.formatted_address.filter(|a| !a.is_empty()))
      .or(result.name.filter(|n| !n.is_empty()))
      .unwrap_or_default();

    Ok(ResolvedAddress {
      id: place_id.to_string(),
      label,
      components,
      location,
    })
  }
}

fn to_suggestions(predictions: Vec<Prediction>) -> Vec<PlaceSuggestion> {
  predictions
    .into_iter()
    .enumerate()
    .map(|(idx, prediction)| PlaceSuggestion {
      id: prediction
        .place_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| idx.to_string()),
      label: prediction.description.unwrap_or_default(),
    })
    .collect()
}

fn first_tagged<'a>(components: &'a [AddressComponent], tag: &str) -> Option<&'a AddressComponent> {
  components.iter().find(|c| c.has_type(tag))
}

fn long_form<'a>(components: &'a [AddressComponent], tag: &str) -> Option<&'a str> {
  first_tagged(components, tag)
    .map(|c| c.long_name.as_str())
    .filter(|v| !v.is_empty())
}

fn short_form<'a>(components: &'a [AddressComponent], tag: &str) -> Option<&'a str> {
  first_tagged(components, tag)
    .map(|c| c.short_name.as_str())
    .filter(|v| !v.is_empty())
}

/// Maps the upstream component list onto the canonical address, first match wins.
/// No upstream tag feeds `unit_number` or `street_type`.
pub fn extract_components(components: &[AddressComponent], fallback_country: &str) -> AddressComponents {
  let suburb = long_form(components, "locality")
    .or_else(|| long_form(components, "postal_town"))
    .or_else(|| long_form(components, "sublocality"));

  AddressComponents {
    unit_number: String::new(),
    street_number: long_form(components, "street_number").unwrap_or_default().to_string(),
    street_name: long_form(components, "route").unwrap_or_default().to_string(),
    street_type: String::new(),
    suburb: suburb.unwrap_or_default().to_string(),
    state: short_form(components, "administrative_area_level_1")
      .unwrap_or_default()
      .to_string(),
    postcode: long_form(components, "postal_code").unwrap_or_default().to_string(),
    country: long_form(components, "country").unwrap_or(fallback_country).to_string(),
  }
}
