//! Core types, validation rules and the business rule engine for the Roster
//! employee-records service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::EmployeeStore`]; the transport layer
//! drives [`service::EmployeeService`].

pub mod employee;
pub mod error;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
