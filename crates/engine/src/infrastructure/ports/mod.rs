//! Port traits for infrastructure boundaries.
//!
//! The catalog port is the ONLY abstraction in the engine; everything else is
//! concrete. It exists so the remote provider can be swapped (or faked in tests).

mod catalog;
mod error;
mod types;

// =============================================================================
// External Service Ports
// =============================================================================
pub use catalog::CatalogPort;
pub use types::{CategoryRelations, SpeciesDetails, VariantDetails, VarietyRef};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use catalog::MockCatalogPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::CatalogError;
