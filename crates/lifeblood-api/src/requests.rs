//! Handlers for `/requests` and `/matches`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/requests` | Body: [`RequestForm`]; 201 + request, matches and rendered matches |
//! | `GET`  | `/requests` | All requests, newest first |
//! | `GET`  | `/requests/latest/matches` | Rendered matches for the newest request |
//! | `GET`  | `/matches` | `?bloodGroup=...&city=...`; JSON donors |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::{Html, IntoResponse},
};
use lifeblood_core::{
  ValidationError,
  blood::BloodGroup,
  donor::Donor,
  form::RequestForm,
  registry::{Registry, RequestMatches},
  request::BloodRequest,
  store::RecordStore,
};
use lifeblood_html::render_match_results;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RequestPosted {
  pub request: BloodRequest,
  pub matches: Vec<Donor>,
  /// The match cards, or the empty state when nobody matches.
  pub html:    String,
}

/// `POST /requests`
pub async fn create<S>(
  State(registry): State<Registry<S>>,
  Json(form): Json<RequestForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
{
  let RequestMatches { request, matches } = registry.save_request(&form).await?;
  let html = render_match_results(&matches);
  Ok((StatusCode::CREATED, Json(RequestPosted { request, matches, html })))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /requests`
pub async fn list<S>(
  State(registry): State<Registry<S>>,
) -> Result<Json<Vec<BloodRequest>>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(registry.requests().await?))
}

/// `GET /requests/latest/matches`
pub async fn latest_matches<S>(
  State(registry): State<Registry<S>>,
) -> Result<Html<String>, ApiError>
where
  S: RecordStore + 'static,
{
  let matches = registry
    .latest_request_matches()
    .await?
    .map(|rm| rm.matches)
    .unwrap_or_default();
  Ok(Html(render_match_results(&matches)))
}

// ─── Match ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchParams {
  pub blood_group: String,
  pub city:        String,
}

/// `GET /matches?bloodGroup=<group>&city=<city>`
///
/// A blank parameter yields an empty list; an unknown blood group is a
/// validation error.
pub async fn matches<S>(
  State(registry): State<Registry<S>>,
  Query(params): Query<MatchParams>,
) -> Result<Json<Vec<Donor>>, ApiError>
where
  S: RecordStore + 'static,
{
  let blood_group = match params.blood_group.trim() {
    "" => None,
    group => Some(group.parse::<BloodGroup>().map_err(|_| {
      let mut e = ValidationError::default();
      e.invalid("bloodGroup");
      e
    })?),
  };
  let city = Some(params.city.trim()).filter(|c| !c.is_empty());

  Ok(Json(registry.match_donors(blood_group, city).await?))
}
