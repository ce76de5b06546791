//! HTTP command surface for LifeBlood.
//!
//! Exposes an axum [`Router`] backed by a [`Registry`] over any
//! [`RecordStore`]. Each route is one explicit command: the page posts a form
//! or a filter change and gets back JSON and/or a rendered HTML fragment.
//! Auth and TLS are out of scope.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let registry = Registry::new(Arc::new(store));
//! axum::serve(listener, lifeblood_api::router(registry)).await?;
//! ```

pub mod donors;
pub mod eligibility;
pub mod error;
pub mod requests;

use std::path::PathBuf;

use axum::{
  Json, Router,
  extract::State,
  routing::{get, post},
};
use lifeblood_core::{
  registry::{Registry, Stats},
  store::RecordStore,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `LIFEBLOOD_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite file holding both collections. `~` is expanded.
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store_path: PathBuf::from("lifeblood.db"),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full command router for `registry`.
pub fn router<S>(registry: Registry<S>) -> Router
where
  S: RecordStore + 'static,
{
  Router::new()
    // Donors
    .route("/donors", get(donors::list::<S>).post(donors::create::<S>))
    .route("/donors/list", get(donors::render_list::<S>))
    .route("/donors/list/clear", post(donors::clear_filters::<S>))
    .route("/donors/cities", get(donors::cities::<S>))
    .route("/donors/cities/options", get(donors::city_options::<S>))
    .route("/donors/{id}/toggle", post(donors::toggle::<S>))
    // Requests and matching
    .route("/requests", get(requests::list::<S>).post(requests::create::<S>))
    .route("/requests/latest/matches", get(requests::latest_matches::<S>))
    .route("/matches", get(requests::matches::<S>))
    // Standalone pages
    .route("/eligibility", post(eligibility::handler))
    .route("/stats", get(stats::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(registry)
}

/// `GET /stats` — homepage counters.
async fn stats<S>(
  State(registry): State<Registry<S>>,
) -> Result<Json<Stats>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(registry.stats().await?))
}

#[cfg(test)]
mod tests;
