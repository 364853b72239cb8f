//! HTTP-level tests driving the full router against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{HeaderMap, Request, StatusCode, header},
};
use roster_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  router(Arc::new(store))
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<&str>,
) -> (StatusCode, HeaderMap, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  if body.is_some() {
    builder = builder.header(header::CONTENT_TYPE, "application/json");
  }
  let req = builder
    .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
    .unwrap();

  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let headers = resp.headers().clone();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, headers, value)
}

fn payload(name: &str, email: &str, role: &str, salary: f64) -> String {
  json!({
    "name": name,
    "email": email,
    "role": role,
    "salary": salary,
    "admissionDate": "2023-01-10",
  })
  .to_string()
}

async fn create(app: &Router, name: &str, email: &str, role: &str) -> Value {
  let (status, _, body) = send(
    app,
    "POST",
    "/api/employees",
    Some(&payload(name, email, role, 5000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "body: {body}");
  body
}

// ─── Walkthrough ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_reject_raise_cut_deactivate_and_reactivate() {
  let app = app().await;

  let (status, headers, body) = send(
    &app,
    "POST",
    "/api/employees",
    Some(&payload("Ana Silva", "ana@x.com", "Engineer", 5000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(headers[header::LOCATION], "/api/employees/1");
  assert_eq!(
    body,
    json!({
      "id": 1,
      "name": "Ana Silva",
      "email": "ana@x.com",
      "role": "Engineer",
      "salary": 5000.0,
      "admissionDate": "2023-01-10",
      "active": true,
    })
  );

  let (status, _, body) = send(
    &app,
    "PUT",
    "/api/employees/1",
    Some(&payload("Ana Silva", "ana@x.com", "Engineer", 4000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({ "erro": "salary cannot be reduced" }));

  let (status, _, body) = send(&app, "PATCH", "/api/employees/1/deactivate", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert_eq!(body, Value::Null);

  let (status, headers, body) = send(
    &app,
    "POST",
    "/api/employees",
    Some(&payload("Ana Silva", "ana@x.com", "Engineer", 6000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(headers[header::LOCATION], "/api/employees/1");
  assert_eq!(body["id"], 1);
  assert_eq!(body["active"], true);
  assert_eq!(body["salary"], 6000.0);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_payload_returns_field_map() {
  let app = app().await;
  let body = json!({
    "name": " Al ",
    "email": "nope",
    "role": "   ",
    "salary": 0,
    "admissionDate": "2999-01-01",
  })
  .to_string();

  let (status, _, body) = send(&app, "POST", "/api/employees", Some(&body)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(
    body,
    json!({
      "name": "name must have at least 3 characters",
      "email": "email must be a valid address",
      "role": "role must not be blank",
      "salary": "salary must be greater than zero",
      "admissionDate": "admissionDate must not be in the future",
    })
  );
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() {
  let app = app().await;
  let (status, _, body) = send(&app, "POST", "/api/employees", Some("{}")).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["salary"], "salary is required");
  assert_eq!(body["admissionDate"], "admissionDate is required");
  assert_eq!(body["name"], "name must not be blank");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
  let app = app().await;
  let (status, _, body) =
    send(&app, "POST", "/api/employees", Some(r#"{"name": "Ana""#)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["erro"].is_string(), "body: {body}");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
  let app = app().await;

  let (status, _, body) = send(&app, "GET", "/api/employees/99", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "erro": "employee not found with id 99" }));

  let (status, _, _) = send(&app, "PATCH", "/api/employees/99/deactivate", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _, _) = send(
    &app,
    "PUT",
    "/api/employees/99",
    Some(&payload("Ana Silva", "ana@x.com", "Engineer", 5000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
  let app = app().await;
  let (status, _, body) = send(&app, "GET", "/api/employees/abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["erro"].is_string());
}

#[tokio::test]
async fn duplicate_active_email_is_conflict() {
  let app = app().await;
  create(&app, "Ana Silva", "ana@x.com", "Engineer").await;

  let (status, _, body) = send(
    &app,
    "POST",
    "/api/employees",
    Some(&payload("Outra Ana", "ana@x.com", "Designer", 3000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body, json!({ "erro": "email already registered: ana@x.com" }));
}

#[tokio::test]
async fn update_of_inactive_record_is_rejected() {
  let app = app().await;
  create(&app, "Ana Silva", "ana@x.com", "Engineer").await;
  send(&app, "PATCH", "/api/employees/1/deactivate", None).await;

  let (status, _, body) = send(
    &app,
    "PUT",
    "/api/employees/1",
    Some(&payload("Ana Silva", "ana@x.com", "Engineer", 9000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({ "erro": "only active employees may be edited" }));
}

#[tokio::test]
async fn inactive_record_is_refused_before_payload_checks() {
  let app = app().await;
  create(&app, "Ana Silva", "ana@x.com", "Engineer").await;
  send(&app, "PATCH", "/api/employees/1/deactivate", None).await;

  let invalid = json!({ "name": "Al", "salary": 0 }).to_string();
  let (status, _, body) = send(&app, "PUT", "/api/employees/1", Some(&invalid)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({ "erro": "only active employees may be edited" }));
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_and_update_roundtrip() {
  let app = app().await;
  create(&app, "Ana Silva", "ana@x.com", "Engineer").await;

  let (status, _, body) = send(
    &app,
    "PUT",
    "/api/employees/1",
    Some(&payload("Ana Lima", "ana.lima@x.com", "Lead", 5000.0)),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["email"], "ana.lima@x.com");

  let (status, _, body) = send(&app, "GET", "/api/employees/1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["name"], "Ana Lima");
  assert_eq!(body["role"], "Lead");
  assert_eq!(body["active"], true);
}

#[tokio::test]
async fn list_applies_optional_filters_sorted_by_name() {
  let app = app().await;
  create(&app, "Carla Dias", "carla@x.com", "engineer").await;
  create(&app, "Ana Silva", "ana@x.com", "Engineer").await;
  create(&app, "Bruno Melo", "bruno@x.com", "Designer").await;
  let dario = create(&app, "Dario Reis", "dario@x.com", "Engineer").await;
  send(
    &app,
    "PATCH",
    &format!("/api/employees/{}/deactivate", dario["id"]),
    None,
  )
  .await;

  let names = |v: &Value| -> Vec<String> {
    v.as_array()
      .unwrap()
      .iter()
      .map(|e| e["name"].as_str().unwrap().to_owned())
      .collect()
  };

  let (status, _, body) = send(&app, "GET", "/api/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(names(&body), ["Ana Silva", "Bruno Melo", "Carla Dias", "Dario Reis"]);

  let (_, _, body) =
    send(&app, "GET", "/api/employees?role=Engineer&active=true", None).await;
  assert_eq!(names(&body), ["Ana Silva", "Carla Dias"]);

  let (_, _, body) = send(&app, "GET", "/api/employees?active=false", None).await;
  assert_eq!(names(&body), ["Dario Reis"]);

  let (_, _, body) = send(&app, "GET", "/api/employees?role=ENGINEER", None).await;
  assert_eq!(names(&body), ["Ana Silva", "Carla Dias", "Dario Reis"]);
}

#[tokio::test]
async fn invalid_active_filter_is_bad_request() {
  let app = app().await;
  let (status, _, body) = send(&app, "GET", "/api/employees?active=maybe", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["erro"].is_string());
}

#[tokio::test]
async fn salary_digits_survive_create_and_read() {
  let app = app().await;
  let body = r#"{"name":"Ana Silva","email":"ana@x.com","role":"Engineer",
                 "salary":12345678901234567.89,"admissionDate":"2023-01-10"}"#;

  let (status, _, created) = send(&app, "POST", "/api/employees", Some(body)).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["salary"].to_string(), "12345678901234567.89");

  let (_, _, fetched) = send(&app, "GET", "/api/employees/1", None).await;
  assert_eq!(fetched["salary"].to_string(), "12345678901234567.89");
}
