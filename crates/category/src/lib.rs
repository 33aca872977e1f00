//! Category domain module.
//!
//! This crate contains the catalog's `Category` aggregate and its validation
//! rules, implemented purely as domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod validator;

pub use category::{Category, CategoryId, CategorySnapshot};
pub use validator::{CategoryValidator, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
