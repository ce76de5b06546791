//! Error types for `lifeblood-core`.

use serde::Serialize;
use thiserror::Error;

use crate::id::RecordId;

/// What is wrong with a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Problem {
  Missing,
  Invalid,
}

/// One offending form field, named as the form names it (e.g. `fullName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   &'static str,
  pub problem: Problem,
}

/// Required input was missing or malformed; nothing was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("please complete all required fields ({})", describe(.fields))]
pub struct ValidationError {
  pub fields: Vec<FieldError>,
}

fn describe(fields: &[FieldError]) -> String {
  fields
    .iter()
    .map(|f| match f.problem {
      Problem::Missing => format!("{} is missing", f.field),
      Problem::Invalid => format!("{} is invalid", f.field),
    })
    .collect::<Vec<_>>()
    .join(", ")
}

impl ValidationError {
  pub fn missing(&mut self, field: &'static str) {
    self.fields.push(FieldError { field, problem: Problem::Missing });
  }

  pub fn invalid(&mut self, field: &'static str) {
    self.fields.push(FieldError { field, problem: Problem::Invalid });
  }

  pub fn is_empty(&self) -> bool { self.fields.is_empty() }

  /// `Ok(())` when no field was flagged.
  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The donor was removed or never existed. Callers treat this as a no-op.
  #[error("donor not found: {0}")]
  DonorNotFound(RecordId),
}

impl Error {
  pub(crate) fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
