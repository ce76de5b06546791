//! City filter options.

use lifeblood_core::filter::ALL;

use crate::escape::escape_html;

/// `<option>` elements for the city select: "All cities" first, then
/// `cities` in the given order.
///
/// `selected` stays selected if it is still offered; otherwise the select
/// falls back to "All cities".
pub fn render_city_options(cities: &[String], selected: &str) -> String {
  let keep = cities.iter().any(|c| c == selected);

  let mut out = format!(
    "<option value=\"{ALL}\"{}>All cities</option>",
    if keep { "" } else { " selected" }
  );
  for city in cities {
    let city_html = escape_html(city);
    let mark = if keep && city == selected { " selected" } else { "" };
    out.push_str(&format!("<option value=\"{city_html}\"{mark}>{city_html}</option>"));
  }
  out
}
