//! Unified error types for the domain layer
//!
//! Provides a common error type for validation of catalog values, so adapters
//! never need to fall back to `String` or `anyhow` for domain failures.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format or range
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Requested page lies outside the collection
    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

impl DomainError {
    /// Creates a validation error for values that violate a domain invariant.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Species name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a page out-of-range error
    pub fn page_out_of_range(page: u32, total_pages: u32) -> Self {
        Self::PageOutOfRange { page, total_pages }
    }
}
