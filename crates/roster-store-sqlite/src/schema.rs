//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are never deleted; deactivation flips `active` to 0.
CREATE TABLE IF NOT EXISTS employees (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT    NOT NULL,
    email          TEXT    NOT NULL UNIQUE,
    role           TEXT    NOT NULL,
    salary         TEXT    NOT NULL,   -- decimal string, e.g. '5000.00'
    admission_date TEXT    NOT NULL,   -- YYYY-MM-DD
    active         INTEGER NOT NULL DEFAULT 1 CHECK (active IN (0, 1))
);

CREATE INDEX IF NOT EXISTS employees_name_idx ON employees(name);
CREATE INDEX IF NOT EXISTS employees_role_idx ON employees(role COLLATE NOCASE);

PRAGMA user_version = 1;
";
