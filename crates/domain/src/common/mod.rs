//! Common utility functions shared across the catalog crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::capitalize;
