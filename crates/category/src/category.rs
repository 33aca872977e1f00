use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateId, AggregateRoot, DomainError, DomainResult, Entity, ValidationHandler, Validator,
    clock,
};

use crate::validator::CategoryValidator;

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub AggregateId);

impl CategoryId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Generate a fresh, never-before-seen identifier.
    pub fn unique() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = AggregateId::from_str(s)
            .map_err(|_| DomainError::invalid_id(format!("CategoryId: {s:?}")))?;
        Ok(Self(id))
    }
}

/// Aggregate root: Category.
///
/// Deletion is soft: an inactive category carries the moment it was first
/// deactivated in `deleted_at` until it is activated again. Field rules are
/// only checked by [`Category::validate`], so an invalid category can exist
/// until someone asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category. Never fails and performs no validation.
    ///
    /// `deleted_at` starts absent even when `is_active` is false.
    pub fn new(name: Option<&str>, description: Option<&str>, is_active: bool) -> Self {
        let now = clock::now();
        let category = Self {
            id: CategoryId::unique(),
            name: name.map(str::to_owned),
            description: description.map(str::to_owned),
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        tracing::debug!(category_id = %category.id, active = is_active, "category created");
        category
    }

    /// Rehydrate a category from a snapshot.
    ///
    /// The name is not validated; only the structural timestamp invariants are
    /// enforced.
    pub fn restore(snapshot: CategorySnapshot) -> DomainResult<Self> {
        if snapshot.updated_at < snapshot.created_at {
            return Err(DomainError::invariant(format!(
                "category {}: updated_at precedes created_at",
                snapshot.id
            )));
        }
        if snapshot.active && snapshot.deleted_at.is_some() {
            return Err(DomainError::invariant(format!(
                "category {}: active category cannot carry deleted_at",
                snapshot.id
            )));
        }

        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            description: snapshot.description,
            active: snapshot.active,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
            deleted_at: snapshot.deleted_at,
        })
    }

    pub fn snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Check the category's fields, reporting violations to `handler`.
    ///
    /// Never fails by itself: an `Err` is the handler's own verdict.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        let result = CategoryValidator::new(self, handler).validate();

        if let Err(err) = &result {
            tracing::debug!(category_id = %self.id, error = %err, "category validation failed");
        } else if handler.has_errors() {
            tracing::debug!(
                category_id = %self.id,
                errors = handler.errors().len(),
                "category validation collected errors"
            );
        }
        result
    }

    /// Mark the category active, clearing any soft-delete timestamp.
    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = clock::after(self.updated_at);

        tracing::debug!(category_id = %self.id, "category activated");
    }

    /// Mark the category inactive.
    ///
    /// The first deactivation records `deleted_at`; later ones keep it.
    pub fn deactivate(&mut self) {
        let now = clock::after(self.updated_at);
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;

        tracing::debug!(category_id = %self.id, "category deactivated");
    }

    /// Replace the descriptive fields and move to the requested status.
    pub fn update(&mut self, name: Option<&str>, description: Option<&str>, is_active: bool) {
        self.name = name.map(str::to_owned);
        self.description = description.map(str::to_owned);

        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }

        tracing::debug!(category_id = %self.id, "category updated");
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        Category::validate(self, handler)
    }
}

/// Plain record of every [`Category`] field, for persistence and API layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
