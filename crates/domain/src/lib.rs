//! Pokedex domain - catalog types, value objects, and invariants.
//!
//! Pure data: nothing in this crate performs I/O. The engine crate fetches
//! remote fragments and assembles them into these types.

extern crate self as pokedex_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    derive_form_name, is_excluded_form, CategorySlot, CompositeRecord, Creature, DegradedField,
    FormDescriptor, IrregularForm, IrregularFormRegistry, LineageNode, DEFAULT_FORM_NAME,
};
pub use error::DomainError;
pub use ids::{CreatureId, FormId};
pub use value_objects::{
    total_stats, Category, EvolutionSummary, Palette, PageWindow, ResourceRef, SpeciesName,
    SpriteSet, Stat, StatName, Weaknesses,
};
