//! Handlers for `/employees` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `GET`   | `/employees` | Optional `?role=...` (case-insensitive) and `?active=true\|false` |
//! | `GET`   | `/employees/:id` | 404 if not found |
//! | `POST`  | `/employees` | Body: [`EmployeeRequest`]; 201 + `Location`, also when reactivating |
//! | `PUT`   | `/employees/:id` | Body: [`EmployeeRequest`] |
//! | `PATCH` | `/employees/:id/deactivate` | 204 |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::{StatusCode, header},
  response::IntoResponse,
};
use roster_core::{
  employee::{EmployeeId, EmployeeView},
  service::{CreateOutcome, EmployeeService},
  store::{EmployeeFilter, EmployeeStore},
  validation::EmployeeRequest,
};
use serde::Deserialize;

use crate::{API_PREFIX, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub role:   Option<String>,
  pub active: Option<bool>,
}

/// `GET /employees[?role=<role>][&active=<bool>]`
pub async fn list<S>(
  State(service): State<EmployeeService<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<EmployeeView>>, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Query(params) = params?;
  let employees = service
    .list(EmployeeFilter { role: params.role, active: params.active })
    .await?;
  Ok(Json(employees.into_iter().map(EmployeeView::from).collect()))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S>(
  State(service): State<EmployeeService<S>>,
  id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<EmployeeView>, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Path(id) = id?;
  Ok(Json(service.get(id).await?.into()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored record.
///
/// A reactivated record is reported as a creation too; the `Location` header
/// then points at its original identifier.
pub async fn create<S>(
  State(service): State<EmployeeService<S>>,
  body: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Json(body) = body?;
  let (outcome, employee) = service.create(body).await?;

  match outcome {
    CreateOutcome::Created => tracing::info!(id = %employee.id, "employee created"),
    CreateOutcome::Reactivated => {
      tracing::info!(id = %employee.id, "inactive employee reactivated")
    }
  }

  let location = format!("{API_PREFIX}/employees/{}", employee.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(EmployeeView::from(employee)),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id`
pub async fn update<S>(
  State(service): State<EmployeeService<S>>,
  id: Result<Path<EmployeeId>, PathRejection>,
  body: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeView>, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Path(id) = id?;
  let Json(body) = body?;
  Ok(Json(service.update(id, body).await?.into()))
}

// ─── Deactivate ───────────────────────────────────────────────────────────────

/// `PATCH /employees/:id/deactivate` — 204 on success.
pub async fn deactivate<S>(
  State(service): State<EmployeeService<S>>,
  id: Result<Path<EmployeeId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Path(id) = id?;
  service.deactivate(id).await?;
  tracing::info!(%id, "employee deactivated");
  Ok(StatusCode::NO_CONTENT)
}
