use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Catalog number of a creature.
///
/// Valid values are `1..=N` where `N` is the configured collection size; the
/// upper bound is checked by [`CreatureId::within`] since the collection size
/// is configuration, not a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CreatureId(u32);

impl CreatureId {
    /// Create a creature id, rejecting zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::invalid_id("creature id must be positive"));
        }
        Ok(Self(value))
    }

    /// Create a creature id that must also fall inside a collection of `size` entries.
    pub fn within(value: u32, size: u32) -> Result<Self, DomainError> {
        let id = Self::new(value)?;
        if value > size {
            return Err(DomainError::invalid_id(format!(
                "creature id {} is outside the collection (1..={})",
                value, size
            )));
        }
        Ok(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for CreatureId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreatureId> for u32 {
    fn from(value: CreatureId) -> Self {
        value.0
    }
}

/// Identifier of a form (variant) of a creature.
///
/// Standard variants are numbered by the provider; irregular variants only
/// exist under a compound `"<baseId>-<tag>"` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormId {
    Numeric(u32),
    Irregular(String),
}

impl FormId {
    /// Compound identifier for an irregular variant, lower-cased.
    pub fn irregular(base: CreatureId, tag: &str) -> Self {
        Self::Irregular(format!("{}-{}", base, tag.to_lowercase()))
    }

    pub fn is_irregular(&self) -> bool {
        matches!(self, Self::Irregular(_))
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Irregular(s) => f.write_str(s),
        }
    }
}
