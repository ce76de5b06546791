//! SQL schema for the LifeBlood SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per named collection. `value_json` always holds the complete
-- collection as a JSON array and is replaced wholesale on every save.
CREATE TABLE IF NOT EXISTS collections (
    key         TEXT PRIMARY KEY,  -- 'lifeblood_donors' | 'lifeblood_requests'
    value_json  TEXT NOT NULL,
    updated_at  TEXT NOT NULL      -- ISO 8601 UTC
);

PRAGMA user_version = 1;
";
