//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use lifeblood_core::store::{
  Collection, Record, RecordStore, decode_records, encode_records,
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A LifeBlood record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// The stored JSON text for `collection`, if it was ever saved.
  pub async fn read_raw(&self, collection: Collection) -> Result<Option<String>> {
    let key = collection.key();
    let raw = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value_json FROM collections WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get::<_, String>(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(raw)
  }

  /// Replace the stored JSON text for `collection` in one statement.
  pub async fn write_raw(&self, collection: Collection, value: String) -> Result<()> {
    let key = collection.key();
    let at = Utc::now().to_rfc3339();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO collections (key, value_json, updated_at)
           VALUES (?1, ?2, ?3)
           ON CONFLICT(key) DO UPDATE
             SET value_json = excluded.value_json,
                 updated_at = excluded.updated_at",
          rusqlite::params![key, value, at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn load<R: Record>(&self) -> Result<Vec<R>> {
    let raw = self.read_raw(R::COLLECTION).await?;
    Ok(decode_records(raw.as_deref()))
  }

  async fn save<R: Record>(&self, records: &[R]) -> Result<()> {
    let encoded = encode_records(records)?;
    let bytes = encoded.len();
    self.write_raw(R::COLLECTION, encoded).await?;
    tracing::debug!(
      key = R::COLLECTION.key(),
      records = records.len(),
      bytes,
      "collection saved"
    );
    Ok(())
  }
}
