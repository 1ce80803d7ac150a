//! Places provider client
//!
//! Thin wrapper over the Google Places web service (autocomplete and details).
//! Responses are returned in their wire shape; normalization happens in
//! `domains::address`.

mod client;
mod types;

pub use client::{GooglePlacesClient, PlacesProvider};
pub use types::{
  AddressComponent, AutocompleteRequest, AutocompleteResponse, DetailsRequest, DetailsResponse, Geometry, Location,
  PlaceResult, PlacesConfig, Prediction, DEFAULT_PLACES_BASE_URL,
};
