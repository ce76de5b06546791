//! [`MemoryStore`] — an in-process [`RecordStore`] for tests and embedding.
//!
//! Collections are held as the same JSON text a persistent backend would
//! write, so unreadable values and quota failures behave the same way.

use std::{
  collections::HashMap,
  sync::{Mutex, MutexGuard},
};

use thiserror::Error;

use crate::store::{
  Collection, Record, RecordStore, decode_records, encode_records,
};

#[derive(Debug, Error)]
pub enum MemoryStoreError {
  /// The write would push total stored bytes past the configured quota.
  #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
  QuotaExceeded { needed: usize, quota: usize },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("memory store lock poisoned")]
  Poisoned,
}

/// A key-value store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
  slots: Mutex<HashMap<Collection, String>>,
  /// Upper bound on the summed length of all stored values.
  quota: Option<usize>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// A store that rejects writes once the stored text would exceed `bytes`.
  pub fn with_quota(bytes: usize) -> Self {
    Self { slots: Mutex::default(), quota: Some(bytes) }
  }

  /// Overwrite the raw stored text for `collection`, bypassing encoding.
  pub fn put_raw(
    &self,
    collection: Collection,
    raw: impl Into<String>,
  ) -> Result<(), MemoryStoreError> {
    self.slots()?.insert(collection, raw.into());
    Ok(())
  }

  /// The raw stored text for `collection`, if any.
  pub fn raw(
    &self,
    collection: Collection,
  ) -> Result<Option<String>, MemoryStoreError> {
    Ok(self.slots()?.get(&collection).cloned())
  }

  fn slots(
    &self,
  ) -> Result<MutexGuard<'_, HashMap<Collection, String>>, MemoryStoreError> {
    self.slots.lock().map_err(|_| MemoryStoreError::Poisoned)
  }
}

impl RecordStore for MemoryStore {
  type Error = MemoryStoreError;

  async fn load<R: Record>(&self) -> Result<Vec<R>, MemoryStoreError> {
    let slots = self.slots()?;
    Ok(decode_records(slots.get(&R::COLLECTION).map(String::as_str)))
  }

  async fn save<R: Record>(&self, records: &[R]) -> Result<(), MemoryStoreError> {
    let encoded = encode_records(records)?;
    let mut slots = self.slots()?;

    if let Some(quota) = self.quota {
      let others: usize = slots
        .iter()
        .filter(|(collection, _)| **collection != R::COLLECTION)
        .map(|(_, raw)| raw.len())
        .sum();
      let needed = others + encoded.len();
      if needed > quota {
        return Err(MemoryStoreError::QuotaExceeded { needed, quota });
      }
    }

    slots.insert(R::COLLECTION, encoded);
    Ok(())
  }
}
