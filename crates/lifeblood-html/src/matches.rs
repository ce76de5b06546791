//! Match results shown after a request is posted.

use lifeblood_core::donor::Donor;

use crate::escape::{encode_uri_component, escape_html};

const NO_MATCHES: &str = "<div class=\"empty-state\">\
<p>No matching donors found in this city.</p></div>";

/// Render matched donors, or the empty state when there are none.
pub fn render_match_results(matches: &[Donor]) -> String {
  if matches.is_empty() {
    return NO_MATCHES.to_owned();
  }

  matches.iter().map(render_match_card).collect()
}

fn render_match_card(d: &Donor) -> String {
  let name = escape_html(&d.full_name);
  let phone = escape_html(&d.phone);
  let email = d
    .email
    .as_deref()
    .map(|e| {
      let e = escape_html(e);
      format!("<p><strong>Email:</strong> <a href=\"mailto:{e}\">{e}</a></p>")
    })
    .unwrap_or_default();

  format!(
    "<article class=\"match-card card\">\
<div class=\"donor-header\"><h3>{name}</h3>\
<div class=\"donor-availability available\">Available</div></div>\
<div class=\"donor-meta\">\
<p><strong>Blood Group:</strong> {group}</p>\
<p><strong>City:</strong> {city}</p>\
<p><strong>Phone:</strong> <a href=\"tel:{tel}\">{phone}</a></p>\
{email}</div></article>",
    group = escape_html(d.blood_group.as_str()),
    city = escape_html(&d.city),
    tel = encode_uri_component(&d.phone),
  )
}
