//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Field validation failures are returned as a flat `{"field": "message"}`
//! object; every other failure as `{"erro": "message"}`.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] roster_core::Error),

  /// The request could not be decoded (bad JSON, bad path or query).
  #[error("bad request: {0}")]
  BadRequest(String),
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { Self::BadRequest(r.body_text()) }
}

impl From<PathRejection> for ApiError {
  fn from(r: PathRejection) -> Self { Self::BadRequest(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self { Self::BadRequest(r.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use roster_core::Error as E;

    let (status, message) = match self {
      ApiError::Core(E::Validation(errors)) => {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
      }
      ApiError::Core(e @ E::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
      ApiError::Core(e @ E::EmailConflict(_)) => (StatusCode::CONFLICT, e.to_string()),
      ApiError::Core(E::BusinessRule(m)) => (StatusCode::BAD_REQUEST, m),
      ApiError::Core(e @ E::Store(_)) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
    };
    (status, Json(json!({ "erro": message }))).into_response()
  }
}
