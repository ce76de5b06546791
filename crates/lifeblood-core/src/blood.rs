//! The eight standard ABO/Rh blood groups.
//!
//! Matching is exact: no donor-compatibility graph is modelled, so an `O-`
//! donor only ever matches an `O-` request.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A blood group as written on forms and in storage (`"A+"`, `"AB-"`, ...).
///
/// Parsing is case-sensitive; `"a+"` is not a blood group.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
pub enum BloodGroup {
  #[serde(rename = "A+")]
  #[strum(serialize = "A+")]
  APositive,
  #[serde(rename = "A-")]
  #[strum(serialize = "A-")]
  ANegative,
  #[serde(rename = "B+")]
  #[strum(serialize = "B+")]
  BPositive,
  #[serde(rename = "B-")]
  #[strum(serialize = "B-")]
  BNegative,
  #[serde(rename = "AB+")]
  #[strum(serialize = "AB+")]
  AbPositive,
  #[serde(rename = "AB-")]
  #[strum(serialize = "AB-")]
  AbNegative,
  #[serde(rename = "O+")]
  #[strum(serialize = "O+")]
  OPositive,
  #[serde(rename = "O-")]
  #[strum(serialize = "O-")]
  ONegative,
}

impl BloodGroup {
  /// The label used on forms and in persisted records.
  pub fn as_str(self) -> &'static str { self.into() }
}
