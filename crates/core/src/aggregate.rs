//! Identity traits for catalog domain models.

use crate::error::DomainResult;
use crate::validation::ValidationHandler;

/// Something that keeps its identity while its attributes change.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Aggregate root: an entity that owns its invariants.
///
/// Aggregates never fail on their own when validated. They report every
/// violation to the supplied [`ValidationHandler`], and the handler decides
/// whether a violation ends the validation (`Err`) or is merely recorded.
pub trait AggregateRoot: Entity {
    /// Check the aggregate's current field values against its rules.
    ///
    /// Must not mutate the aggregate.
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()>;
}
