//! SQLite backend for the LifeBlood record store.
//!
//! Each collection is one row of a key-value table, mirroring the browser
//! storage the registry was first written against. Wraps [`tokio_rusqlite`]
//! so all database access runs on a dedicated thread without blocking the
//! async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
