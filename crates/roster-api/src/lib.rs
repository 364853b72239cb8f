//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::EmployeeStore`]. TLS and other transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, roster_api::router(Arc::new(store)))
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch},
};
use roster_core::{service::EmployeeService, store::EmployeeStore};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Path the API router is nested under by [`router`]; also used to build
/// `Location` headers.
pub const API_PREFIX: &str = "/api";

/// Build the employee routes for `store`, without a prefix.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>).put(employees::update::<S>),
    )
    .route("/employees/{id}/deactivate", patch(employees::deactivate::<S>))
    .with_state(EmployeeService::new(store))
}

/// The complete application: [`api_router`] under [`API_PREFIX`] with
/// per-request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .nest(API_PREFIX, api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests;
