//! HTML fragment rendering for LifeBlood pages.
//!
//! Converts [`lifeblood_core`] records and verdicts into markup the pages
//! insert verbatim. Pure synchronous; no HTTP or database dependencies.
//!
//! Every piece of user-supplied text passes through [`escape_html`] before it
//! reaches the output.
//!
//! # Quick start
//!
//! ```no_run
//! use lifeblood_core::filter::DonorFilter;
//! use lifeblood_html::render_donor_list;
//!
//! let html = render_donor_list(&[], &DonorFilter::default());
//! assert!(html.contains("empty-state"));
//! ```

mod cities;
mod donors;
mod eligibility;
mod escape;
mod matches;

pub use cities::render_city_options;
pub use donors::{render_donor_card, render_donor_list};
pub use eligibility::render_eligibility;
pub use escape::{encode_uri_component, escape_html};
pub use matches::render_match_results;
