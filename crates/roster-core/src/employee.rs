//! The employee record, its unsaved form, and the outbound projection.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::EmployeeFields;

/// Store-assigned identifier of an employee record.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
  pub id:             EmployeeId,
  pub name:           String,
  pub email:          String,
  pub role:           String,
  pub salary:         Decimal,
  pub admission_date: NaiveDate,
  pub active:         bool,
}

impl Employee {
  /// Turn the record back into a draft so it can be modified and re-saved
  /// under the same identifier.
  pub fn into_draft(self) -> EmployeeDraft {
    EmployeeDraft {
      id:             Some(self.id),
      name:           self.name,
      email:          self.email,
      role:           self.role,
      salary:         self.salary,
      admission_date: self.admission_date,
      active:         self.active,
    }
  }
}

/// A record about to be written. `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
  pub id:             Option<EmployeeId>,
  pub name:           String,
  pub email:          String,
  pub role:           String,
  pub salary:         Decimal,
  pub admission_date: NaiveDate,
  pub active:         bool,
}

impl EmployeeDraft {
  /// A brand-new, active record built from validated fields.
  pub fn hire(fields: EmployeeFields) -> Self {
    Self {
      id:             None,
      name:           fields.name,
      email:          fields.email,
      role:           fields.role,
      salary:         fields.salary,
      admission_date: fields.admission_date,
      active:         true,
    }
  }

  /// Attach the identifier the store assigned.
  pub fn into_employee(self, id: EmployeeId) -> Employee {
    Employee {
      id,
      name:           self.name,
      email:          self.email,
      role:           self.role,
      salary:         self.salary,
      admission_date: self.admission_date,
      active:         self.active,
    }
  }
}

/// The external-facing shape of an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
  pub id:             EmployeeId,
  pub name:           String,
  pub email:          String,
  pub role:           String,
  #[serde(with = "rust_decimal::serde::arbitrary_precision")]
  pub salary:         Decimal,
  pub admission_date: NaiveDate,
  pub active:         bool,
}

impl From<Employee> for EmployeeView {
  fn from(e: Employee) -> Self {
    Self {
      id:             e.id,
      name:           e.name,
      email:          e.email,
      role:           e.role,
      salary:         e.salary,
      admission_date: e.admission_date,
      active:         e.active,
    }
  }
}
