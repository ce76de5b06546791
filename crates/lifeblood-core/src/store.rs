//! The `RecordStore` trait and the named collections it persists.
//!
//! The trait is implemented by storage backends (the in-memory
//! [`MemoryStore`](crate::memory::MemoryStore) and `lifeblood-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.
//!
//! Every collection is persisted as one JSON array under a fixed key, so a
//! save is always a whole-collection replacement.

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

use crate::id::RecordId;

// ─── Collections ─────────────────────────────────────────────────────────────

/// A named collection in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  Donors,
  Requests,
}

impl Collection {
  /// The fixed storage key for this collection.
  pub const fn key(self) -> &'static str {
    match self {
      Self::Donors => "lifeblood_donors",
      Self::Requests => "lifeblood_requests",
    }
  }
}

/// A record type that lives in exactly one collection.
pub trait Record:
  Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
  const COLLECTION: Collection;

  fn id(&self) -> &RecordId;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the persistent key-value store holding the collections.
///
/// `save` must replace the prior content in a single write: when it returns an
/// error, a subsequent `load` sees the previous collection unchanged.
///
/// There is no locking across calls. A load-modify-save sequence racing with
/// another writer on the same store is last-writer-wins.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the full collection for `R`, newest first. Absent or unreadable
  /// collections load as empty.
  fn load<R: Record>(
    &self,
  ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;

  /// Replace the full collection for `R` with `records`.
  fn save<'a, R: Record>(
    &'a self,
    records: &'a [R],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── Encoding helpers shared by backends ─────────────────────────────────────

/// Serialise a collection to the JSON array stored under its key.
pub fn encode_records<R: Record>(records: &[R]) -> serde_json::Result<String> {
  serde_json::to_string(records)
}

/// Decode a stored collection. A missing value is an empty collection; so is a
/// value that does not parse, which is logged and otherwise ignored.
pub fn decode_records<R: Record>(raw: Option<&str>) -> Vec<R> {
  let Some(raw) = raw else {
    return Vec::new();
  };
  match serde_json::from_str(raw) {
    Ok(records) => records,
    Err(e) => {
      tracing::warn!(
        key = R::COLLECTION.key(),
        error = %e,
        "stored collection is unreadable; treating it as empty"
      );
      Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{donor::Donor, request::BloodRequest};

  #[test]
  fn keys_are_fixed() {
    assert_eq!(Donor::COLLECTION.key(), "lifeblood_donors");
    assert_eq!(BloodRequest::COLLECTION.key(), "lifeblood_requests");
  }

  #[test]
  fn absent_and_corrupt_collections_decode_empty() {
    assert!(decode_records::<Donor>(None).is_empty());
    assert!(decode_records::<Donor>(Some("{not json")).is_empty());
    assert!(decode_records::<Donor>(Some("[]")).is_empty());
  }
}
