//! [`Registry`] — the command handlers the pages call.
//!
//! Each command is a short load / modify / save sequence against an injected
//! [`RecordStore`]. Nothing is cached between commands, so every call sees the
//! latest persisted state.

use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;

use crate::{
  Error, Result,
  blood::BloodGroup,
  donor::Donor,
  filter::DonorFilter,
  form::{DonorForm, RequestForm},
  id::RecordId,
  matcher,
  request::BloodRequest,
  store::{Record, RecordStore},
};

/// Homepage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
  pub total_donors:   usize,
  pub total_requests: usize,
}

/// A stored request together with the donors that currently match it.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMatches {
  pub request: BloodRequest,
  pub matches: Vec<Donor>,
}

/// Command handlers over a shared store. Cloning is cheap.
pub struct Registry<S> {
  store: Arc<S>,
}

impl<S> Clone for Registry<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecordStore> Registry<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  async fn load<R: Record>(&self) -> Result<Vec<R>> {
    self.store.load::<R>().await.map_err(Error::storage)
  }

  async fn save<R: Record>(&self, records: &[R]) -> Result<()> {
    self.store.save(records).await.map_err(|e| {
      tracing::error!(
        key = R::COLLECTION.key(),
        error = %e,
        "failed to persist collection"
      );
      Error::storage(e)
    })
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Every donor, newest first.
  pub async fn donors(&self) -> Result<Vec<Donor>> { self.load().await }

  /// Every request, newest first.
  pub async fn requests(&self) -> Result<Vec<BloodRequest>> {
    self.load().await
  }

  /// Donors admitted by `filter`, newest first.
  pub async fn donor_list(&self, filter: &DonorFilter) -> Result<Vec<Donor>> {
    Ok(filter.apply(&self.donors().await?))
  }

  /// Available donors with exactly `blood_group` in `city`.
  pub async fn match_donors(
    &self,
    blood_group: Option<BloodGroup>,
    city: Option<&str>,
  ) -> Result<Vec<Donor>> {
    let donors = self.donors().await?;
    Ok(matcher::match_donors(&donors, blood_group, city))
  }

  /// Matches for the most recently posted request, if there is one.
  pub async fn latest_request_matches(&self) -> Result<Option<RequestMatches>> {
    let Some(request) = self.requests().await?.into_iter().next() else {
      return Ok(None);
    };
    let matches = self
      .match_donors(
        Some(request.required_blood_group),
        Some(&request.request_city),
      )
      .await?;
    Ok(Some(RequestMatches { request, matches }))
  }

  pub async fn stats(&self) -> Result<Stats> {
    Ok(Stats {
      total_donors:   self.donors().await?.len(),
      total_requests: self.requests().await?.len(),
    })
  }

  /// Distinct donor cities, trimmed and sorted, for the city filter.
  pub async fn cities(&self) -> Result<Vec<String>> {
    let cities: BTreeSet<String> = self
      .donors()
      .await?
      .into_iter()
      .map(|d| d.city.trim().to_owned())
      .filter(|c| !c.is_empty())
      .collect();
    Ok(cities.into_iter().collect())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Validate `form`, then store the new donor at the front of the list.
  pub async fn save_donor(&self, form: &DonorForm) -> Result<Donor> {
    let donor = form.validate()?.into_donor();

    let mut donors = self.donors().await?;
    donors.insert(0, donor.clone());
    self.save(&donors).await?;

    tracing::info!(donor_id = %donor.id, blood_group = %donor.blood_group, "donor registered");
    Ok(donor)
  }

  /// Validate `form`, store the request at the front of the list, and match
  /// it against the current donors.
  pub async fn save_request(&self, form: &RequestForm) -> Result<RequestMatches> {
    let request = form.validate()?.into_request();

    let mut requests = self.requests().await?;
    requests.insert(0, request.clone());
    self.save(&requests).await?;

    let matches = self
      .match_donors(
        Some(request.required_blood_group),
        Some(&request.request_city),
      )
      .await?;

    tracing::info!(
      request_id = %request.id,
      matches = matches.len(),
      "blood request posted"
    );
    Ok(RequestMatches { request, matches })
  }

  /// Flip one donor's availability and rewrite the collection.
  ///
  /// Other donors and the collection order are left as loaded. An unknown id
  /// changes nothing and yields [`Error::DonorNotFound`].
  pub async fn toggle_availability(&self, id: &RecordId) -> Result<Donor> {
    let mut donors = self.donors().await?;
    let Some(donor) = donors.iter_mut().find(|d| d.id() == id) else {
      tracing::debug!(donor_id = %id, "toggle for unknown donor ignored");
      return Err(Error::DonorNotFound(id.clone()));
    };
    donor.toggle_availability();
    let updated = donor.clone();

    self.save(&donors).await?;

    tracing::info!(
      donor_id = %id,
      available = updated.availability,
      "donor availability toggled"
    );
    Ok(updated)
  }
}
