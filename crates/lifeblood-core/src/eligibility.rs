//! Donation eligibility self-check.
//!
//! Pure rule evaluation; nothing here touches storage. Rules are checked in
//! order and the first that applies decides the verdict.

use serde::{Deserialize, Serialize};

/// Youngest age at which donation is considered safe.
pub const MIN_AGE: u32 = 18;
/// Oldest age at which donation is considered safe.
pub const MAX_AGE: u32 = 70;
/// Minimum gap between two donations.
pub const DEFERRAL_DAYS: u32 = 90;

/// Answers from the eligibility questionnaire. `None` means unanswered.
///
/// `age` is taken as any JSON number so that negative or fractional input
/// reaches the age rule instead of failing to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityAnswers {
  pub age:                 Option<f64>,
  pub has_chronic_illness: Option<bool>,
  pub donated_recently:    Option<bool>,
}

impl EligibilityAnswers {
  pub fn evaluate(&self) -> Verdict {
    evaluate(self.age, self.has_chronic_illness, self.donated_recently)
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IneligibleReason {
  AgeOutOfRange { age: f64 },
  ChronicIllness,
  RecentDonation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
  Eligible,
  Ineligible(IneligibleReason),
  /// At least one question was left unanswered.
  Incomplete,
}

/// Serialisable summary of a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
  pub status:   &'static str,
  pub eligible: bool,
  pub reason:   String,
}

impl Verdict {
  pub fn is_eligible(&self) -> bool { matches!(self, Self::Eligible) }

  /// Short heading for the result card.
  pub fn title(&self) -> &'static str {
    match self {
      Self::Eligible => "Likely Eligible",
      Self::Ineligible(_) => "Not Eligible",
      Self::Incomplete => "Incomplete",
    }
  }

  /// User-facing explanation.
  pub fn reason(&self) -> String {
    match self {
      Self::Eligible => "You are likely eligible to donate! Please verify at a \
                         medical center."
        .to_owned(),
      Self::Ineligible(IneligibleReason::AgeOutOfRange { age }) => {
        format!("Your age ({age}) is outside the safe donation range.")
      }
      Self::Ineligible(IneligibleReason::ChronicIllness) => {
        "Because you have a chronic illness, you are not eligible to donate."
          .to_owned()
      }
      Self::Ineligible(IneligibleReason::RecentDonation) => format!(
        "You donated recently. Wait at least {DEFERRAL_DAYS} days before \
         donating again."
      ),
      Self::Incomplete => "Please answer all questions.".to_owned(),
    }
  }

  pub fn assessment(&self) -> Assessment {
    let status = match self {
      Self::Eligible => "eligible",
      Self::Ineligible(_) => "ineligible",
      Self::Incomplete => "incomplete",
    };
    Assessment { status, eligible: self.is_eligible(), reason: self.reason() }
  }
}

/// Evaluate the questionnaire. An age of zero counts as unanswered.
pub fn evaluate(
  age: Option<f64>,
  has_chronic_illness: Option<bool>,
  donated_recently: Option<bool>,
) -> Verdict {
  let (Some(age), Some(has_chronic_illness), Some(donated_recently)) =
    (age.filter(|a| *a != 0.0), has_chronic_illness, donated_recently)
  else {
    return Verdict::Incomplete;
  };

  if !(f64::from(MIN_AGE)..=f64::from(MAX_AGE)).contains(&age) {
    Verdict::Ineligible(IneligibleReason::AgeOutOfRange { age })
  } else if has_chronic_illness {
    Verdict::Ineligible(IneligibleReason::ChronicIllness)
  } else if donated_recently {
    Verdict::Ineligible(IneligibleReason::RecentDonation)
  } else {
    Verdict::Eligible
  }
}
