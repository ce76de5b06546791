//! Donor list filters.
//!
//! [`FilterControls`] holds the raw values of the four list controls (search
//! box, blood-group select, city select, availability select). It is parsed
//! into a [`DonorFilter`], which applies its predicates in a fixed order and
//! keeps a donor only if every predicate holds.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{ValidationError, blood::BloodGroup, donor::Donor, matcher};

/// Neutral value of the three select controls.
pub const ALL: &str = "all";

// ─── Controls ────────────────────────────────────────────────────────────────

/// Current values of the donor list controls, as the page submits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterControls {
  /// Free-text name search.
  pub q:            String,
  pub blood_group:  String,
  pub city:         String,
  pub availability: String,
}

impl Default for FilterControls {
  fn default() -> Self {
    Self {
      q:            String::new(),
      blood_group:  ALL.to_owned(),
      city:         ALL.to_owned(),
      availability: ALL.to_owned(),
    }
  }
}

impl FilterControls {
  /// Controls with every value at its neutral setting.
  pub fn cleared() -> Self { Self::default() }

  /// Reset all four controls to neutral.
  pub fn clear(&mut self) { *self = Self::cleared(); }
}

// ─── Availability ────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AvailabilityFilter {
  #[default]
  All,
  Available,
  Unavailable,
}

impl AvailabilityFilter {
  fn admits(self, available: bool) -> bool {
    match self {
      Self::All => true,
      Self::Available => available,
      Self::Unavailable => !available,
    }
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A parsed filter. `None` fields are not constrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilter {
  /// Lowercased name fragment.
  pub query:        Option<String>,
  pub blood_group:  Option<BloodGroup>,
  /// Normalised city name.
  pub city:         Option<String>,
  pub availability: AvailabilityFilter,
}

impl DonorFilter {
  /// Compose the four controls into one filter.
  ///
  /// Blank or `"all"` values leave their dimension unconstrained. Select
  /// values that name no blood group or availability state are rejected.
  pub fn from_controls(
    controls: &FilterControls,
  ) -> Result<Self, ValidationError> {
    let mut errors = ValidationError::default();

    let query = Some(controls.q.trim())
      .filter(|q| !q.is_empty())
      .map(str::to_lowercase);

    let blood_group = match neutral_or(&controls.blood_group) {
      None => None,
      Some(value) => match value.parse::<BloodGroup>() {
        Ok(group) => Some(group),
        Err(_) => {
          errors.invalid("bloodGroup");
          None
        }
      },
    };

    let city = neutral_or(&controls.city).map(matcher::normalize_city);

    let availability = match neutral_or(&controls.availability) {
      None => AvailabilityFilter::All,
      Some(value) => value.parse().unwrap_or_else(|_| {
        errors.invalid("availability");
        AvailabilityFilter::All
      }),
    };

    errors.into_result()?;
    Ok(Self { query, blood_group, city, availability })
  }

  /// Name, then blood group, then city, then availability.
  pub fn admits(&self, donor: &Donor) -> bool {
    if let Some(q) = &self.query
      && !donor.full_name.to_lowercase().contains(q.as_str())
    {
      return false;
    }
    if let Some(group) = self.blood_group
      && donor.blood_group != group
    {
      return false;
    }
    if let Some(city) = &self.city
      && matcher::normalize_city(&donor.city) != *city
    {
      return false;
    }
    self.availability.admits(donor.availability)
  }

  /// The donors this filter admits, in their original order.
  pub fn apply(&self, donors: &[Donor]) -> Vec<Donor> {
    donors.iter().filter(|d| self.admits(d)).cloned().collect()
  }
}

fn neutral_or(value: &str) -> Option<&str> {
  let value = value.trim();
  (!value.is_empty() && !value.eq_ignore_ascii_case(ALL)).then_some(value)
}
