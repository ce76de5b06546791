//! Handler for `POST /eligibility`.
//!
//! Body: `{"age": 30, "hasChronicIllness": false, "donatedRecently": false}`.
//! Any field may be omitted; the verdict is then `incomplete`.

use axum::Json;
use lifeblood_core::eligibility::{Assessment, EligibilityAnswers};
use lifeblood_html::render_eligibility;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
  #[serde(flatten)]
  pub assessment: Assessment,
  pub html:       String,
}

/// `POST /eligibility`
pub async fn handler(
  Json(answers): Json<EligibilityAnswers>,
) -> Json<EligibilityResponse> {
  let verdict = answers.evaluate();
  Json(EligibilityResponse {
    assessment: verdict.assessment(),
    html:       render_eligibility(&verdict),
  })
}
