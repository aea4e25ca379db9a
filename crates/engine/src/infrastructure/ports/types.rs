//! Data returned by the catalog port.
//!
//! Decoded and validated by the adapter; wire formats never leak past it.

use pokedex_domain::{Category, ResourceRef, SpeciesName, SpriteSet};

/// Damage relations of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRelations {
    pub category: Category,
    /// Categories this one takes double damage from, in provider order.
    pub double_damage_from: Vec<Category>,
}

/// One entry of a species' variant listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarietyRef {
    pub name: String,
    pub resource: ResourceRef,
    pub is_default: bool,
}

/// Per-species record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesDetails {
    pub name: SpeciesName,
    pub varieties: Vec<VarietyRef>,
    /// Absent for species the provider lists without a lineage.
    pub lineage: Option<ResourceRef>,
}

/// Per-variant record (only what the forms list needs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDetails {
    pub id: u32,
    pub name: String,
    pub sprites: SpriteSet,
}
