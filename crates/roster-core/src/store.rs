//! The `EmployeeStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The business rule engine depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::{
  Result,
  employee::{Employee, EmployeeDraft, EmployeeId},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`EmployeeRecords::query`]. Both filters are optional and
/// apply independently; an empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
  /// Role to match, compared case-insensitively.
  pub role:   Option<String>,
  pub active: Option<bool>,
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Record access available inside one unit of work.
///
/// Obtained through [`EmployeeStore::transact`]; every call made through the
/// same handle belongs to the same transaction.
pub trait EmployeeRecords {
  fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;

  /// Exact, case-sensitive match on the stored email.
  fn find_by_email(&self, email: &str) -> Result<Option<Employee>>;

  /// All records matching `filter`, sorted by name ascending. Records with
  /// equal names keep identifier order.
  fn query(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>>;

  /// Insert or update by identifier. A draft without an identifier is
  /// inserted and receives a fresh one.
  ///
  /// Fails with [`Error::EmailConflict`](crate::Error::EmailConflict) if the
  /// write would give two records the same email.
  fn save(&self, draft: EmployeeDraft) -> Result<Employee>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an employee store backend.
///
/// There is no delete operation: records are deactivated, never removed.
pub trait EmployeeStore: Send + Sync {
  /// Run `work` as a single atomic unit.
  ///
  /// Writes made through the [`EmployeeRecords`] handle are committed only if
  /// `work` returns `Ok`; on `Err` the store is left exactly as it was.
  fn transact<T, F>(&self, work: F) -> impl Future<Output = Result<T>> + Send + '_
  where
    T: Send + 'static,
    F: FnOnce(&dyn EmployeeRecords) -> Result<T> + Send + 'static;
}
