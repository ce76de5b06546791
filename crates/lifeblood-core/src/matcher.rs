//! Donor matching for blood requests.
//!
//! A donor matches when the blood group is identical, the city is the same
//! after trimming and lowercasing, and the donor is currently available.
//! Compatibility between groups (e.g. `O-` as universal donor) is not
//! modelled.

use crate::{blood::BloodGroup, donor::Donor};

/// Canonical form of a city name for comparisons.
pub fn normalize_city(city: &str) -> String { city.trim().to_lowercase() }

/// Whether two city names denote the same city. Blank names never match.
pub fn same_city(a: &str, b: &str) -> bool {
  let (a, b) = (a.trim(), b.trim());
  !a.is_empty() && !b.is_empty() && a.to_lowercase() == b.to_lowercase()
}

/// Whether `donor` can answer a request for `blood_group` in `city`.
pub fn is_match(donor: &Donor, blood_group: BloodGroup, city: &str) -> bool {
  donor.blood_group == blood_group
    && same_city(&donor.city, city)
    && donor.availability
}

/// All donors matching `blood_group` and `city`, in collection order.
///
/// Returns nothing when either criterion is absent or blank.
pub fn match_donors(
  donors: &[Donor],
  blood_group: Option<BloodGroup>,
  city: Option<&str>,
) -> Vec<Donor> {
  let (Some(blood_group), Some(city)) = (blood_group, city) else {
    return Vec::new();
  };
  if city.trim().is_empty() {
    return Vec::new();
  }
  donors
    .iter()
    .filter(|d| is_match(d, blood_group, city))
    .cloned()
    .collect()
}
