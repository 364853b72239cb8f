//! Error types for `roster-core`.

use thiserror::Error;

use crate::{employee::EmployeeId, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum Error {
  /// The request payload failed one or more field rules.
  #[error("validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("employee not found with id {0}")]
  NotFound(EmployeeId),

  /// The email is already held by another record.
  #[error("email already registered: {0}")]
  EmailConflict(String),

  #[error("{0}")]
  BusinessRule(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationErrors> for Error {
  fn from(errors: ValidationErrors) -> Self { Self::Validation(errors) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
