//! Core types, rules and command handlers for the LifeBlood donor registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::RecordStore`]; the HTTP surface lives
//! in `lifeblood-api` and HTML rendering in `lifeblood-html`.

pub mod blood;
pub mod donor;
pub mod eligibility;
pub mod error;
pub mod filter;
pub mod form;
pub mod id;
pub mod matcher;
pub mod memory;
pub mod registry;
pub mod request;
pub mod store;

pub use error::{Error, FieldError, Problem, Result, ValidationError};
