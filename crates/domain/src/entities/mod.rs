//! Catalog entities.
//!
//! Plain data with invariants enforced at construction; no I/O.

mod composite;
mod creature;
mod form;
mod irregular_form;
mod lineage;

pub use composite::{CompositeRecord, DegradedField};
pub use creature::{CategorySlot, Creature};
pub use form::{derive_form_name, is_excluded_form, FormDescriptor, DEFAULT_FORM_NAME};
pub use irregular_form::{IrregularForm, IrregularFormRegistry};
pub use lineage::LineageNode;
