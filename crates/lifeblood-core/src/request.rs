//! Blood requests — a posted need for blood of a given group in a given city.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::{
  blood::BloodGroup,
  id::RecordId,
  store::{Collection, Record},
};

/// A stored blood request. Never mutated after creation; only appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
  pub id:                   RecordId,
  pub patient_name:         String,
  pub required_blood_group: BloodGroup,
  pub hospital:             String,
  pub request_city:         String,
  pub contact_number:       String,
  pub created_at:           DateTime<Utc>,
}

impl Record for BloodRequest {
  const COLLECTION: Collection = Collection::Requests;

  fn id(&self) -> &RecordId { &self.id }
}
