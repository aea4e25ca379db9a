//! Validated name newtypes for catalog entities
//!
//! Names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed and lower-cased (provider slugs are case-insensitive)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::capitalize;
use crate::error::DomainError;

/// Maximum length for a species slug
const MAX_NAME_LENGTH: usize = 100;

// ============================================================================
// SpeciesName
// ============================================================================

/// Canonical species name as a provider slug (`"bulbasaur"`, `"mr-mime"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpeciesName(String);

impl SpeciesName {
    /// Create a new validated species name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Species name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Species name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Capitalized form for display.
    pub fn display_name(&self) -> String {
        capitalize(&self.0)
    }
}

impl fmt::Display for SpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SpeciesName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SpeciesName> for String {
    fn from(name: SpeciesName) -> String {
        name.0
    }
}
