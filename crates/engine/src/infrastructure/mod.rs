//! Infrastructure implementations.
//!
//! Contains the catalog port, its implementations and runtime configuration.

pub mod bounded_catalog;
pub mod config;
pub mod pokeapi;
pub mod ports;
