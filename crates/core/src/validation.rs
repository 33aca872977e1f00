//! Validation handler contract.
//!
//! Validators never decide how a violation propagates. They append each
//! [`ValidationError`] to a caller-supplied [`ValidationHandler`], and the
//! handler picks the strategy:
//!
//! - [`Notification`] collects every error and lets validation run to the end.
//! - [`ThrowsValidationHandler`] fails fast with the first error appended.
//!
//! Handler verdicts are plain `DomainResult`s, so validators forward them with `?`.

use crate::error::{DomainError, DomainResult, ValidationError};

/// Sink for validation errors.
pub trait ValidationHandler {
    /// Report a single violation.
    ///
    /// Returns `Err` when the handler wants validation to stop here.
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// Report several violations, in order.
    fn append_all<I>(&mut self, errors: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = ValidationError>,
    {
        for error in errors {
            self.append(error)?;
        }
        Ok(())
    }

    /// Errors retained so far.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

impl<H: ValidationHandler> ValidationHandler for &mut H {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        (**self).append(error)
    }

    fn errors(&self) -> &[ValidationError] {
        (**self).errors()
    }
}

/// A rule checker bound to one subject and one handler.
pub trait Validator {
    /// Run every rule, reporting violations to the bound handler.
    fn validate(self) -> DomainResult<()>;
}

/// Collecting handler: records every error, never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// `Ok` when nothing was collected, otherwise every collected error.
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler: the first appended error becomes the returned failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrowsValidationHandler;

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        tracing::debug!(error = %error, "validation failed fast");
        Err(DomainError::validation(error))
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(messages: &[&str]) -> Vec<ValidationError> {
        messages.iter().copied().map(ValidationError::new).collect()
    }

    #[test]
    fn notification_collects_everything() {
        let mut notification = Notification::create();

        notification.append_all(errors(&["first", "second"])).unwrap();
        notification.append(ValidationError::new("third")).unwrap();

        assert!(notification.has_errors());
        assert_eq!(notification.errors().len(), 3);
        assert_eq!(notification.first_error().unwrap().message(), "first");
    }

    #[test]
    fn empty_notification_converts_to_ok() {
        let notification = Notification::create();

        assert!(!notification.has_errors());
        assert!(notification.first_error().is_none());
        assert_eq!(notification.into_result(), Ok(()));
    }

    #[test]
    fn notification_converts_to_validation_error() {
        let notification = Notification::from_error(ValidationError::new("boom"));

        let err = notification.into_result().unwrap_err();
        assert_eq!(err.errors(), errors(&["boom"]).as_slice());
    }

    #[test]
    fn throws_handler_stops_at_first_error() {
        let mut handler = ThrowsValidationHandler::new();

        let err = handler
            .append_all(errors(&["first", "second"]))
            .unwrap_err();

        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message(), "first");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(!handler.has_errors());
    }

    #[test]
    fn mutable_reference_forwards_to_handler() {
        fn report<H: ValidationHandler>(mut handler: H) -> usize {
            handler.append(ValidationError::new("via ref")).unwrap();
            handler.errors().len()
        }

        let mut notification = Notification::create();
        assert_eq!(report(&mut notification), 1);
        assert_eq!(notification.errors().len(), 1);
    }
}
