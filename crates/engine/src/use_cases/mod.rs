//! Use cases - catalog viewer orchestration.
//!
//! Use cases orchestrate catalog port calls to fulfill viewer requests.

pub mod catalog;

pub use catalog::CatalogUseCases;
