//! Field rules for inbound employee payloads.
//!
//! [`EmployeeRequest::validate`] is the single place these rules live. The
//! business rule engine calls it before touching the store and trusts the
//! [`EmployeeFields`] it returns.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail as _;

/// Minimum length of a trimmed name, in characters.
pub const MIN_NAME_CHARS: usize = 3;

// ─── Request ─────────────────────────────────────────────────────────────────

/// Inbound payload for create and update.
///
/// Every field is optional at the wire level so that a missing field is
/// reported alongside the other field errors instead of failing
/// deserialisation outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
  pub name:           Option<String>,
  pub email:          Option<String>,
  pub role:           Option<String>,
  #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
  pub salary:         Option<Decimal>,
  pub admission_date: Option<NaiveDate>,
}

/// A payload that passed every field rule. Strings are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
  pub name:           String,
  pub email:          String,
  pub role:           String,
  pub salary:         Decimal,
  pub admission_date: NaiveDate,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Field name → message, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
  /// Record a violation. The first message recorded for a field wins.
  pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
    self.0.entry(field).or_insert_with(|| message.into());
  }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.0.keys().copied()
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, (field, message)) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{field}: {message}")?;
    }
    Ok(())
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

impl EmployeeRequest {
  /// Trim every string field and check it against the field rules.
  ///
  /// `today` is the reference date for the "admission date not in the
  /// future" rule. All violations are collected before returning.
  pub fn validate(self, today: NaiveDate) -> Result<EmployeeFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = trimmed(self.name);
    match &name {
      None => errors.add("name", "name must not be blank"),
      Some(n) if n.chars().count() < MIN_NAME_CHARS => errors.add(
        "name",
        format!("name must have at least {MIN_NAME_CHARS} characters"),
      ),
      Some(_) => {}
    }

    let email = trimmed(self.email);
    match &email {
      None => errors.add("email", "email must not be blank"),
      Some(e) if !e.validate_email() => {
        errors.add("email", "email must be a valid address")
      }
      Some(_) => {}
    }

    let role = trimmed(self.role);
    if role.is_none() {
      errors.add("role", "role must not be blank");
    }

    match self.salary {
      None => errors.add("salary", "salary is required"),
      Some(s) if s <= Decimal::ZERO => {
        errors.add("salary", "salary must be greater than zero")
      }
      Some(_) => {}
    }

    match self.admission_date {
      None => errors.add("admissionDate", "admissionDate is required"),
      Some(d) if d > today => {
        errors.add("admissionDate", "admissionDate must not be in the future")
      }
      Some(_) => {}
    }

    match (name, email, role, self.salary, self.admission_date) {
      (Some(name), Some(email), Some(role), Some(salary), Some(admission_date))
        if errors.is_empty() =>
      {
        Ok(EmployeeFields { name, email, role, salary, admission_date })
      }
      _ => Err(errors),
    }
  }
}

/// Trim a string; blank or absent becomes `None`.
fn trimmed(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_owned())
    .filter(|v| !v.is_empty())
}
