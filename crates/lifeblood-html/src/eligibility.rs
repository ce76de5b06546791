//! Eligibility result card.

use lifeblood_core::eligibility::Verdict;

use crate::escape::escape_html;

pub fn render_eligibility(verdict: &Verdict) -> String {
  let class = if verdict.is_eligible() { "success" } else { "error" };
  format!(
    "<div class=\"result-card {class}\"><h3>{title}</h3><p>{reason}</p></div>",
    title = verdict.title(),
    reason = escape_html(&verdict.reason()),
  )
}

#[cfg(test)]
mod tests {
  use lifeblood_core::eligibility::evaluate;

  use super::*;

  #[test]
  fn eligible_card_is_success() {
    let html = render_eligibility(&evaluate(Some(30.0), Some(false), Some(false)));
    assert!(html.contains("result-card success"));
    assert!(html.contains("<h3>Likely Eligible</h3>"));
  }

  #[test]
  fn incomplete_card_is_error() {
    let html = render_eligibility(&Verdict::Incomplete);
    assert!(html.contains("result-card error"));
    assert!(html.contains("Please answer all questions."));
  }
}
