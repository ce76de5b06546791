//! Registration and request forms, and the factory that turns them into
//! records.
//!
//! Forms carry raw user input. [`DonorForm::validate`] and
//! [`RequestForm::validate`] trim and type-check every field and report all
//! offending fields at once; [`NewDonor::into_donor`] and
//! [`NewRequest::into_request`] assign the id and creation timestamp.

use std::str::FromStr;

use chrono::Utc;
use serde::Deserialize;

use crate::{
  ValidationError,
  blood::BloodGroup,
  donor::{Donor, Gender},
  id::RecordId,
  request::BloodRequest,
};

// ─── Raw input ───────────────────────────────────────────────────────────────

/// A numeric form field, which clients may submit as a number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
  Number(i64),
  Text(String),
}

impl From<&str> for NumberInput {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

/// Values submitted by the donor registration form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorForm {
  pub full_name:    String,
  pub age:          Option<NumberInput>,
  pub gender:       String,
  pub blood_group:  String,
  pub phone:        String,
  pub email:        String,
  pub city:         String,
  /// Unset means the checkbox was left at its default, which is checked.
  pub availability: Option<bool>,
}

/// Values submitted by the blood request form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestForm {
  pub patient_name:         String,
  pub required_blood_group: String,
  pub hospital:             String,
  pub request_city:         String,
  pub contact_number:       String,
}

// ─── Validated input ─────────────────────────────────────────────────────────

/// A validated donor, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
  pub full_name:    String,
  pub age:          u32,
  pub gender:       Gender,
  pub blood_group:  BloodGroup,
  pub phone:        String,
  pub email:        Option<String>,
  pub city:         String,
  pub availability: bool,
}

/// A validated request, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
  pub patient_name:         String,
  pub required_blood_group: BloodGroup,
  pub hospital:             String,
  pub request_city:         String,
  pub contact_number:       String,
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn required_text(
  errors: &mut ValidationError,
  field: &'static str,
  value: &str,
) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    errors.missing(field);
    None
  } else {
    Some(trimmed.to_owned())
  }
}

fn required_parsed<T: FromStr>(
  errors: &mut ValidationError,
  field: &'static str,
  value: &str,
) -> Option<T> {
  let text = required_text(errors, field, value)?;
  match text.parse() {
    Ok(v) => Some(v),
    Err(_) => {
      errors.invalid(field);
      None
    }
  }
}

fn required_positive(
  errors: &mut ValidationError,
  field: &'static str,
  value: Option<&NumberInput>,
) -> Option<u32> {
  let parsed = match value {
    None => {
      errors.missing(field);
      return None;
    }
    Some(NumberInput::Number(n)) => u32::try_from(*n).ok(),
    Some(NumberInput::Text(s)) if s.trim().is_empty() => {
      errors.missing(field);
      return None;
    }
    Some(NumberInput::Text(s)) => s.trim().parse::<u32>().ok(),
  };
  match parsed {
    Some(n) if n > 0 => Some(n),
    _ => {
      errors.invalid(field);
      None
    }
  }
}

// ─── Donor ───────────────────────────────────────────────────────────────────

impl DonorForm {
  /// Check every required field, collecting all problems before failing.
  pub fn validate(&self) -> Result<NewDonor, ValidationError> {
    let mut errors = ValidationError::default();

    let full_name = required_text(&mut errors, "fullName", &self.full_name);
    let age = required_positive(&mut errors, "age", self.age.as_ref());
    let gender = required_parsed(&mut errors, "gender", &self.gender);
    let blood_group =
      required_parsed(&mut errors, "bloodGroup", &self.blood_group);
    let phone = required_text(&mut errors, "phone", &self.phone);
    let city = required_text(&mut errors, "city", &self.city);
    let email = Some(self.email.trim())
      .filter(|e| !e.is_empty())
      .map(str::to_owned);

    match (full_name, age, gender, blood_group, phone, city) {
      (
        Some(full_name),
        Some(age),
        Some(gender),
        Some(blood_group),
        Some(phone),
        Some(city),
      ) if errors.is_empty() => Ok(NewDonor {
        full_name,
        age,
        gender,
        blood_group,
        phone,
        email,
        city,
        availability: self.availability.unwrap_or(true),
      }),
      _ => Err(errors),
    }
  }
}

impl NewDonor {
  /// Stamp a fresh id and creation time.
  pub fn into_donor(self) -> Donor {
    Donor {
      id:           RecordId::generate(),
      full_name:    self.full_name,
      age:          self.age,
      gender:       self.gender,
      blood_group:  self.blood_group,
      phone:        self.phone,
      email:        self.email,
      city:         self.city,
      availability: self.availability,
      created_at:   Utc::now(),
    }
  }
}

// ─── Request ─────────────────────────────────────────────────────────────────

impl RequestForm {
  pub fn validate(&self) -> Result<NewRequest, ValidationError> {
    let mut errors = ValidationError::default();

    let patient_name =
      required_text(&mut errors, "patientName", &self.patient_name);
    let required_blood_group = required_parsed(
      &mut errors,
      "requiredBloodGroup",
      &self.required_blood_group,
    );
    let hospital = required_text(&mut errors, "hospital", &self.hospital);
    let request_city =
      required_text(&mut errors, "requestCity", &self.request_city);
    let contact_number =
      required_text(&mut errors, "contactNumber", &self.contact_number);

    match (
      patient_name,
      required_blood_group,
      hospital,
      request_city,
      contact_number,
    ) {
      (
        Some(patient_name),
        Some(required_blood_group),
        Some(hospital),
        Some(request_city),
        Some(contact_number),
      ) if errors.is_empty() => Ok(NewRequest {
        patient_name,
        required_blood_group,
        hospital,
        request_city,
        contact_number,
      }),
      _ => Err(errors),
    }
  }
}

impl NewRequest {
  pub fn into_request(self) -> BloodRequest {
    BloodRequest {
      id:                   RecordId::generate(),
      patient_name:         self.patient_name,
      required_blood_group: self.required_blood_group,
      hospital:             self.hospital,
      request_city:         self.request_city,
      contact_number:       self.contact_number,
      created_at:           Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Problem;

  fn donor_form() -> DonorForm {
    DonorForm {
      full_name:    "  Meera Nair ".into(),
      age:          Some(NumberInput::Number(31)),
      gender:       "female".into(),
      blood_group:  "B+".into(),
      phone:        "9820012345".into(),
      email:        "".into(),
      city:         " Kochi ".into(),
      availability: None,
    }
  }

  #[test]
  fn valid_donor_is_trimmed_and_available() {
    let donor = donor_form().validate().unwrap();
    assert_eq!(donor.full_name, "Meera Nair");
    assert_eq!(donor.city, "Kochi");
    assert_eq!(donor.email, None);
    assert!(donor.availability);
    assert_eq!(donor.blood_group, BloodGroup::BPositive);
  }

  #[test]
  fn explicit_unavailability_is_kept() {
    let mut form = donor_form();
    form.availability = Some(false);
    assert!(!form.validate().unwrap().availability);
  }

  #[test]
  fn age_accepts_text_input() {
    let mut form = donor_form();
    form.age = Some(" 45 ".into());
    assert_eq!(form.validate().unwrap().age, 45);
  }

  #[test]
  fn every_missing_field_is_reported() {
    let err = DonorForm::default().validate().unwrap_err();
    let fields: Vec<_> = err.fields.iter().map(|f| f.field).collect();
    assert_eq!(
      fields,
      ["fullName", "age", "gender", "bloodGroup", "phone", "city"]
    );
    assert!(err.fields.iter().all(|f| f.problem == Problem::Missing));
  }

  #[test]
  fn malformed_values_are_invalid_not_missing() {
    let mut form = donor_form();
    form.age = Some(NumberInput::Number(0));
    form.blood_group = "C+".into();
    let err = form.validate().unwrap_err();
    assert_eq!(err.fields, vec![
      crate::FieldError { field: "age", problem: Problem::Invalid },
      crate::FieldError { field: "bloodGroup", problem: Problem::Invalid },
    ]);
  }

  #[test]
  fn negative_age_is_invalid() {
    let mut form = donor_form();
    form.age = Some(NumberInput::Number(-3));
    assert!(form.validate().is_err());
  }

  #[test]
  fn factory_assigns_distinct_ids() {
    let a = donor_form().validate().unwrap().into_donor();
    let b = donor_form().validate().unwrap().into_donor();
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn request_requires_every_field() {
    let form = RequestForm {
      patient_name: "Kiran".into(),
      required_blood_group: "O-".into(),
      hospital: "   ".into(),
      request_city: "Pune".into(),
      contact_number: "555".into(),
    };
    let err = form.validate().unwrap_err();
    assert_eq!(err.fields.len(), 1);
    assert_eq!(err.fields[0].field, "hospital");
  }

  #[test]
  fn request_form_deserialises_camel_case() {
    let form: RequestForm = serde_json::from_str(
      r#"{"patientName":"Kiran","requiredBloodGroup":"AB-","hospital":"KEM",
          "requestCity":"Mumbai","contactNumber":"555"}"#,
    )
    .unwrap();
    let request = form.validate().unwrap().into_request();
    assert_eq!(request.required_blood_group, BloodGroup::AbNegative);
    assert_eq!(request.request_city, "Mumbai");
  }
}
