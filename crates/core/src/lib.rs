//! `catalog-core` — domain foundation building blocks for the catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the error model, and the validation handler contract that
//! aggregates report their violations to.

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use aggregate::{AggregateRoot, Entity};
pub use error::{DomainError, DomainResult, ValidationError};
pub use id::AggregateId;
pub use validation::{Notification, ThrowsValidationHandler, ValidationHandler, Validator};
pub use value_object::ValueObject;
