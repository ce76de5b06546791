//! Donor list page: filtered cards with contact and availability actions.

use lifeblood_core::{donor::Donor, filter::DonorFilter};

use crate::escape::{encode_uri_component, escape_html};

const EMPTY_STATE: &str = "<div class=\"empty-state\" id=\"donorEmptyState\">\
<p>No donors match the current filters.</p></div>";

/// Apply `filter` to `donors` and render the survivors as cards.
///
/// Renders the empty state instead when nothing survives.
pub fn render_donor_list(donors: &[Donor], filter: &DonorFilter) -> String {
  let results = filter.apply(donors);
  if results.is_empty() {
    return EMPTY_STATE.to_owned();
  }

  let mut out = String::from("<div class=\"donor-cards\" id=\"donorCards\">");
  for donor in &results {
    out.push_str(&render_donor_card(donor));
  }
  out.push_str("</div>");
  out
}

/// One donor card.
///
/// The contact button carries the phone number in `data-phone`; the toggle
/// button carries the donor id in `data-id`.
pub fn render_donor_card(d: &Donor) -> String {
  let name = escape_html(&d.full_name);
  let group = escape_html(d.blood_group.as_str());
  let city = escape_html(&d.city);
  let gender = escape_html(&d.gender.to_string());
  let phone = escape_html(&d.phone);
  let tel = encode_uri_component(&d.phone);
  let id = escape_html(d.id.as_str());

  let email = d
    .email
    .as_deref()
    .map(|e| {
      let e = escape_html(e);
      format!("<p><strong>Email:</strong> <a href=\"mailto:{e}\">{e}</a></p>")
    })
    .unwrap_or_default();

  let (avail_class, avail_text) = if d.availability {
    ("available", "Available")
  } else {
    ("unavailable", "Not available")
  };

  format!(
    "<article class=\"donor-card card\">\
<div class=\"donor-header\"><h3>{name}</h3>\
<div><span class=\"donor-blood\">{group}</span></div></div>\
<div class=\"donor-meta\">\
<p><strong>City:</strong> {city}</p>\
<p><strong>Age:</strong> {age} • <strong>Gender:</strong> {gender}</p>\
<p><strong>Phone:</strong> <a href=\"tel:{tel}\">{phone}</a></p>\
{email}\
<p class=\"donor-availability {avail_class}\">{avail_text}</p>\
<div class=\"donor-actions\">\
<button class=\"btn btn-ghost btn-small contact-btn\" data-phone=\"{phone}\">Contact</button>\
<button class=\"btn btn-outline btn-small toggle-availability\" data-id=\"{id}\">Toggle Availability</button>\
</div></div></article>",
    age = d.age,
  )
}
