use axum::{
  extract::{Query, State},
  response::Json as JsonResponse,
  routing::get,
  Router,
};

use super::model::{AutocompleteQuery, AutocompleteResult, DetailsQuery, ResolvedAddress};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn address_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/places-autocomplete", get(autocomplete_handler))
    .route("/place-details", get(place_details_handler))
}

pub async fn autocomplete_handler(
  State(state): State<SharedAppState>,
  Query(query): Query<AutocompleteQuery>,
) -> Result<JsonResponse<AutocompleteResult>, AppError> {
  state
    .autocomplete(query.q.as_deref().unwrap_or_default(), query.region.as_deref())
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn place_details_handler(
  State(state): State<SharedAppState>,
  Query(query): Query<DetailsQuery>,
) -> Result<JsonResponse<ResolvedAddress>, AppError> {
  state
    .resolve_details(query.id.as_deref().unwrap_or_default(), query.label.as_deref())
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}
