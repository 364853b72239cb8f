//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Salaries are stored as decimal strings so no precision is lost. Admission
//! dates are stored as ISO 8601 calendar dates.

use chrono::NaiveDate;
use roster_core::employee::{Employee, EmployeeId};
use rust_decimal::Decimal;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Decimal ──────────────────────────────────────────────────────────────────

pub fn encode_decimal(d: Decimal) -> String { d.to_string() }

pub fn decode_decimal(s: &str) -> Result<Decimal> { Ok(s.parse()?) }

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// Column list matching the field order of [`RawEmployee::from_row`].
pub const EMPLOYEE_COLUMNS: &str =
  "id, name, email, role, salary, admission_date, active";

/// Raw strings and integers as read from an `employees` row.
pub struct RawEmployee {
  pub id:             i64,
  pub name:           String,
  pub email:          String,
  pub role:           String,
  pub salary:         String,
  pub admission_date: String,
  pub active:         bool,
}

impl RawEmployee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:             row.get(0)?,
      name:           row.get(1)?,
      email:          row.get(2)?,
      role:           row.get(3)?,
      salary:         row.get(4)?,
      admission_date: row.get(5)?,
      active:         row.get(6)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      id:             EmployeeId(self.id),
      name:           self.name,
      email:          self.email,
      role:           self.role,
      salary:         decode_decimal(&self.salary)?,
      admission_date: decode_date(&self.admission_date)?,
      active:         self.active,
    })
  }
}
