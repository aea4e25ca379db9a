//! Pokedex Engine library.
//!
//! Server-side catalog aggregation for the browser viewer.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog fetch, resolve and page aggregation
//! - `infrastructure/` - Catalog port, PokeAPI adapter, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures for catalog-driven tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
