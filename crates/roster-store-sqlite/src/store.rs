//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, TransactionBehavior};
use roster_core::{
  employee::{Employee, EmployeeDraft, EmployeeId},
  store::{EmployeeFilter, EmployeeRecords, EmployeeStore},
};

use crate::{
  Error, Result,
  encode::{EMPLOYEE_COLUMNS, RawEmployee, encode_date, encode_decimal},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every unit
/// of work runs on the connection's single background thread, so units never
/// interleave.
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
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  async fn transact<T, F>(&self, work: F) -> roster_core::Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&dyn EmployeeRecords) -> roster_core::Result<T> + Send + 'static,
  {
    let outcome = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock up front so the reads that drive a
        // decision cannot go stale before the write.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let outcome = work(&SqliteRecords { conn: &*tx });
        if outcome.is_ok() {
          tx.commit()?;
        }
        Ok(outcome)
      })
      .await
      .map_err(Error::from)?;
    outcome
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// [`EmployeeRecords`] over an open transaction.
struct SqliteRecords<'a> {
  conn: &'a rusqlite::Connection,
}

impl SqliteRecords<'_> {
  fn query_one(
    &self,
    sql: &str,
    params: impl rusqlite::Params,
  ) -> roster_core::Result<Option<Employee>> {
    let raw = self
      .conn
      .query_row(sql, params, RawEmployee::from_row)
      .optional()
      .map_err(Error::from)?;
    Ok(raw.map(RawEmployee::into_employee).transpose()?)
  }
}

impl EmployeeRecords for SqliteRecords<'_> {
  fn find_by_id(&self, id: EmployeeId) -> roster_core::Result<Option<Employee>> {
    self.query_one(
      &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1"),
      rusqlite::params![id.0],
    )
  }

  fn find_by_email(&self, email: &str) -> roster_core::Result<Option<Employee>> {
    self.query_one(
      &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = ?1"),
      rusqlite::params![email],
    )
  }

  fn query(&self, filter: &EmployeeFilter) -> roster_core::Result<Vec<Employee>> {
    let sql = format!(
      "SELECT {EMPLOYEE_COLUMNS}
       FROM employees
       WHERE (?1 IS NULL OR role = ?1 COLLATE NOCASE)
         AND (?2 IS NULL OR active = ?2)
       ORDER BY name, id"
    );

    let raws = self
      .conn
      .prepare(&sql)
      .and_then(|mut stmt| {
        let rows = stmt
          .query_map(
            rusqlite::params![filter.role.as_deref(), filter.active],
            RawEmployee::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>();
        rows
      })
      .map_err(Error::from)?;

    Ok(
      raws
        .into_iter()
        .map(RawEmployee::into_employee)
        .collect::<Result<_>>()?,
    )
  }

  fn save(&self, draft: EmployeeDraft) -> roster_core::Result<Employee> {
    let written = self.conn.execute(
      "INSERT INTO employees (id, name, email, role, salary, admission_date, active)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
       ON CONFLICT (id) DO UPDATE SET
         name           = excluded.name,
         email          = excluded.email,
         role           = excluded.role,
         salary         = excluded.salary,
         admission_date = excluded.admission_date,
         active         = excluded.active",
      rusqlite::params![
        draft.id.map(|id| id.0),
        draft.name,
        draft.email,
        draft.role,
        encode_decimal(draft.salary),
        encode_date(draft.admission_date),
        draft.active,
      ],
    );

    match written {
      Ok(_) => {}
      Err(e) if is_unique_violation(&e) => {
        return Err(roster_core::Error::EmailConflict(draft.email));
      }
      Err(e) => return Err(Error::from(e).into()),
    }

    let id = draft
      .id
      .unwrap_or_else(|| EmployeeId(self.conn.last_insert_rowid()));
    Ok(draft.into_employee(id))
  }
}

/// `email` is the only UNIQUE column; the primary key is handled by the
/// upsert clause.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}
