//! Category (damage type) labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::capitalize;
use crate::error::DomainError;

/// A category label such as `Fire` or `Water`.
///
/// The provider publishes lower-case slugs; the label is stored in display
/// form so that equality is exact-name equality on what the viewer shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Create a category from a provider slug or a display label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the label is empty after trimming.
    pub fn new(label: impl Into<String>) -> Result<Self, DomainError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Category label cannot be empty"));
        }
        Ok(Self(capitalize(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> String {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_capitalized() {
        assert_eq!(Category::new("fire").unwrap().as_str(), "Fire");
        assert_eq!(Category::new("Fire").unwrap(), Category::new("fire").unwrap());
    }

    #[test]
    fn empty_label_is_rejected() {
        assert!(Category::new("  ").is_err());
    }
}
