//! Phonebook - a validated phone contact model with a number-deduplicated
//! contact list.
//!
//! This library provides the in-memory model behind a phonebook front-end:
//! contacts carry a non-blank name and a 9-digit phone number, and live in
//! an ordered list where the number is the uniqueness key. The list exposes
//! CRUD, merge, lookup, and deterministic sorted rendering; duplicate
//! inserts are reported through return values rather than errors.
//!
//! The model is fully synchronous and single-threaded. Hosts embedding it
//! in a concurrent setting are responsible for serializing mutations.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: `Contact` and `ContactList` data structures
//! - **error**: Operational error types for positional access

// Re-export commonly used types
pub mod domain;
pub mod error;
pub mod models;

pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{ListError, ListResult};
pub use models::{Contact, ContactList, SetOutcome};
