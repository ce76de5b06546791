//! Donor records — a registered person's donation profile and availability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

use crate::{
  blood::BloodGroup,
  id::RecordId,
  store::{Collection, Record},
};

/// Gender as offered by the registration form.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
  #[serde(alias = "Male")]
  Male,
  #[serde(alias = "Female")]
  Female,
  #[serde(alias = "Other")]
  Other,
}

fn available_by_default() -> bool { true }

/// Older records store an unset email as `""`.
fn blank_as_none<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<Option<String>, D::Error> {
  let email = Option::<String>::deserialize(deserializer)?;
  Ok(email.filter(|e| !e.trim().is_empty()))
}

/// A stored donor profile.
///
/// `availability` is the only field that changes after creation, and only via
/// a full rewrite of the donor collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
  pub id:           RecordId,
  pub full_name:    String,
  pub age:          u32,
  pub gender:       Gender,
  pub blood_group:  BloodGroup,
  pub phone:        String,
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub email:        Option<String>,
  pub city:         String,
  /// Older records without the flag load as available.
  #[serde(default = "available_by_default")]
  pub availability: bool,
  pub created_at:   DateTime<Utc>,
}

impl Donor {
  /// Flip the availability flag, returning the new value.
  pub fn toggle_availability(&mut self) -> bool {
    self.availability = !self.availability;
    self.availability
  }
}

impl Record for Donor {
  const COLLECTION: Collection = Collection::Donors;

  fn id(&self) -> &RecordId { &self.id }
}
