use catalog_core::{DomainResult, ValidationError, ValidationHandler, Validator};

use crate::category::Category;

/// Minimum accepted length of a trimmed category name, in characters.
pub const NAME_MIN_LENGTH: usize = 3;
/// Maximum accepted length of a trimmed category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Checks a [`Category`]'s descriptive fields.
///
/// The description carries no constraint; only the name is checked, and at
/// most one name error is reported per run since the rules are mutually
/// exclusive.
pub struct CategoryValidator<'a, H> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> DomainResult<()> {
        let Some(name) = self.category.name() else {
            return self
                .handler
                .append(ValidationError::new("'name' Should not be null"));
        };

        let name = name.trim();
        if name.is_empty() {
            return self
                .handler
                .append(ValidationError::new("'name' Should not be empty"));
        }

        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return self.handler.append(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} character"
            )));
        }

        Ok(())
    }
}

impl<H: ValidationHandler> Validator for CategoryValidator<'_, H> {
    fn validate(mut self) -> DomainResult<()> {
        self.check_name_constraints()
    }
}
