//! Handlers for `/donors` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/donors` | Body: [`DonorForm`]; returns 201 + stored donor |
//! | `GET`  | `/donors` | Filter controls as query params; JSON donors |
//! | `GET`  | `/donors/list` | Same filters; rendered HTML list |
//! | `POST` | `/donors/list/clear` | Neutral controls + rendered full list |
//! | `POST` | `/donors/{id}/toggle` | Flip availability, re-render with the query's filters |
//! | `GET`  | `/donors/cities` | Sorted distinct cities |
//! | `GET`  | `/donors/cities/options` | `?selected=`; rendered `<option>` list |
//!
//! Filter query params are `q`, `bloodGroup`, `city` and `availability`; the
//! select values default to `all`.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{Html, IntoResponse},
};
use lifeblood_core::{
  donor::Donor,
  filter::{ALL, DonorFilter, FilterControls},
  form::DonorForm,
  id::RecordId,
  registry::Registry,
  store::RecordStore,
};
use lifeblood_html::{render_city_options, render_donor_list};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /donors` — returns 201 + the stored [`Donor`].
pub async fn create<S>(
  State(registry): State<Registry<S>>,
  Json(form): Json<DonorForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
{
  let donor = registry.save_donor(&form).await?;
  Ok((StatusCode::CREATED, Json(donor)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /donors[?q=...][&bloodGroup=...][&city=...][&availability=...]`
pub async fn list<S>(
  State(registry): State<Registry<S>>,
  Query(controls): Query<FilterControls>,
) -> Result<Json<Vec<Donor>>, ApiError>
where
  S: RecordStore + 'static,
{
  let filter = DonorFilter::from_controls(&controls)?;
  Ok(Json(registry.donor_list(&filter).await?))
}

/// `GET /donors/list` — the donor cards for the current filter controls.
pub async fn render_list<S>(
  State(registry): State<Registry<S>>,
  Query(controls): Query<FilterControls>,
) -> Result<Html<String>, ApiError>
where
  S: RecordStore + 'static,
{
  let filter = DonorFilter::from_controls(&controls)?;
  let donors = registry.donors().await?;
  Ok(Html(render_donor_list(&donors, &filter)))
}

/// Response of the clear-filters action: the values to put back into the
/// controls and the re-rendered list.
#[derive(Debug, Serialize)]
pub struct ClearedList {
  pub controls: FilterControls,
  pub html:     String,
}

/// `POST /donors/list/clear`
pub async fn clear_filters<S>(
  State(registry): State<Registry<S>>,
) -> Result<Json<ClearedList>, ApiError>
where
  S: RecordStore + 'static,
{
  let controls = FilterControls::cleared();
  let donors = registry.donors().await?;
  let html = render_donor_list(&donors, &DonorFilter::default());
  Ok(Json(ClearedList { controls, html }))
}

// ─── Toggle ───────────────────────────────────────────────────────────────────

/// `POST /donors/{id}/toggle[?<filter controls>]`
///
/// Filters are checked before anything is written, so a bad filter never
/// leaves a half-applied toggle behind.
pub async fn toggle<S>(
  State(registry): State<Registry<S>>,
  Path(id): Path<String>,
  Query(controls): Query<FilterControls>,
) -> Result<Html<String>, ApiError>
where
  S: RecordStore + 'static,
{
  let filter = DonorFilter::from_controls(&controls)?;
  registry.toggle_availability(&RecordId::from(id)).await?;
  let donors = registry.donors().await?;
  Ok(Html(render_donor_list(&donors, &filter)))
}

// ─── Cities ───────────────────────────────────────────────────────────────────

/// `GET /donors/cities`
pub async fn cities<S>(
  State(registry): State<Registry<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(registry.cities().await?))
}

#[derive(Debug, Deserialize)]
pub struct CityOptionParams {
  /// The city currently chosen in the select.
  pub selected: Option<String>,
}

/// `GET /donors/cities/options[?selected=<city>]`
pub async fn city_options<S>(
  State(registry): State<Registry<S>>,
  Query(params): Query<CityOptionParams>,
) -> Result<Html<String>, ApiError>
where
  S: RecordStore + 'static,
{
  let cities = registry.cities().await?;
  let selected = params.selected.as_deref().unwrap_or(ALL);
  Ok(Html(render_city_options(&cities, selected)))
}
