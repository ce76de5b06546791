//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use lifeblood_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Every variant renders as a JSON body
/// `{"error": "..."}` the page shows as a transient inline message.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(ValidationError),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<lifeblood_core::Error> for ApiError {
  fn from(e: lifeblood_core::Error) -> Self {
    match e {
      lifeblood_core::Error::Validation(v) => Self::Validation(v),
      lifeblood_core::Error::DonorNotFound(id) => {
        Self::NotFound(format!("donor {id} not found"))
      }
      lifeblood_core::Error::Storage(e) => Self::Store(e),
    }
  }
}

impl From<ValidationError> for ApiError {
  fn from(e: ValidationError) -> Self { Self::Validation(e) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Validation(v) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": self.to_string(), "fields": v.fields })),
      )
        .into_response(),
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "storage failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": format!("could not save your changes: {e}") })),
        )
          .into_response()
      }
    }
  }
}
