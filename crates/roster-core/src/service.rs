//! The business rule engine.
//!
//! [`EmployeeService`] owns nothing but a store handle. Each operation
//! validates its input, then performs its read-decide-write sequence inside a
//! single [`EmployeeStore::transact`] call.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::{
  Error, Result,
  employee::{Employee, EmployeeDraft, EmployeeId},
  store::{EmployeeFilter, EmployeeRecords, EmployeeStore},
  validation::{EmployeeFields, EmployeeRequest},
};

/// What [`EmployeeService::create`] did to satisfy the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
  /// A new record with a fresh identifier.
  Created,
  /// An inactive record with the same email was revived and overwritten.
  Reactivated,
}

pub struct EmployeeService<S> {
  store: Arc<S>,
  today: fn() -> NaiveDate,
}

impl<S> Clone for EmployeeService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), today: self.today }
  }
}

impl<S: EmployeeStore> EmployeeService<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, today: local_today }
  }

  /// Replace the clock used for the admission-date rule.
  pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
    self.today = today;
    self
  }

  /// All records matching `filter`, sorted by name.
  pub async fn list(&self, filter: EmployeeFilter) -> Result<Vec<Employee>> {
    self.store.transact(move |records| records.query(&filter)).await
  }

  pub async fn get(&self, id: EmployeeId) -> Result<Employee> {
    self
      .store
      .transact(move |records| records.find_by_id(id)?.ok_or(Error::NotFound(id)))
      .await
  }

  /// Register an employee, reviving an inactive record that holds the same
  /// email instead of creating a second one.
  pub async fn create(
    &self,
    request: EmployeeRequest,
  ) -> Result<(CreateOutcome, Employee)> {
    let fields = request.validate((self.today)())?;
    self.store.transact(move |records| create(records, fields)).await
  }

  /// Overwrite an active record. The record's state is checked before the
  /// payload, so an inactive record is refused whatever the request holds.
  pub async fn update(&self, id: EmployeeId, request: EmployeeRequest) -> Result<Employee> {
    let today = (self.today)();
    self
      .store
      .transact(move |records| update(records, id, request, today))
      .await
  }

  /// Mark a record inactive. Deactivating an inactive record is not an error.
  pub async fn deactivate(&self, id: EmployeeId) -> Result<Employee> {
    self
      .store
      .transact(move |records| {
        let mut draft = records
          .find_by_id(id)?
          .ok_or(Error::NotFound(id))?
          .into_draft();
        draft.active = false;
        records.save(draft)
      })
      .await
  }
}

fn local_today() -> NaiveDate { Local::now().date_naive() }

// ─── Rules ───────────────────────────────────────────────────────────────────

fn create(
  records: &dyn EmployeeRecords,
  fields: EmployeeFields,
) -> Result<(CreateOutcome, Employee)> {
  match records.find_by_email(&fields.email)? {
    None => {
      let saved = records.save(EmployeeDraft::hire(fields))?;
      Ok((CreateOutcome::Created, saved))
    }
    Some(existing) if !existing.active => {
      let mut draft = EmployeeDraft::hire(fields);
      draft.id = Some(existing.id);
      let saved = records.save(draft)?;
      Ok((CreateOutcome::Reactivated, saved))
    }
    Some(_) => Err(Error::EmailConflict(fields.email)),
  }
}

fn update(
  records: &dyn EmployeeRecords,
  id: EmployeeId,
  request: EmployeeRequest,
  today: NaiveDate,
) -> Result<Employee> {
  let existing = records.find_by_id(id)?.ok_or(Error::NotFound(id))?;

  if !existing.active {
    return Err(Error::BusinessRule(
      "only active employees may be edited".into(),
    ));
  }

  let fields = request.validate(today)?;

  let mut draft = existing.into_draft();

  // A case-only difference keeps the stored spelling.
  if draft.email.to_lowercase() != fields.email.to_lowercase() {
    if records.find_by_email(&fields.email)?.is_some() {
      return Err(Error::EmailConflict(fields.email));
    }
    draft.email = fields.email;
  }

  if fields.salary < draft.salary {
    return Err(Error::BusinessRule("salary cannot be reduced".into()));
  }

  draft.name = fields.name;
  draft.role = fields.role;
  draft.salary = fields.salary;
  draft.admission_date = fields.admission_date;
  records.save(draft)
}
