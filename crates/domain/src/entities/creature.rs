//! Creature entity - the base record of one catalog entry
//!
//! Immutable once fetched. Category and species references are opaque
//! provider locations used to fetch the dependent fragments.

use serde::{Deserialize, Serialize};
use pokedex_domain::{
    total_stats, Category, CreatureId, ResourceRef, SpeciesName, SpriteSet, Stat,
};

/// A declared category together with the resource describing its damage relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlot {
    pub category: Category,
    pub resource: ResourceRef,
}

impl CategorySlot {
    pub fn new(category: Category, resource: ResourceRef) -> Self {
        Self { category, resource }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    id: CreatureId,
    name: SpeciesName,
    categories: Vec<CategorySlot>,
    stats: Vec<Stat>,
    sprites: SpriteSet,
    species: ResourceRef,
}

impl Creature {
    pub fn new(id: CreatureId, name: SpeciesName, species: ResourceRef) -> Self {
        Self {
            id,
            name,
            categories: Vec::new(),
            stats: Vec::new(),
            sprites: SpriteSet::default(),
            species,
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategorySlot>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_stats(mut self, stats: Vec<Stat>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_sprites(mut self, sprites: SpriteSet) -> Self {
        self.sprites = sprites;
        self
    }

    // Read-only accessors

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn name(&self) -> &SpeciesName {
        &self.name
    }

    pub fn categories(&self) -> &[CategorySlot] {
        &self.categories
    }

    /// Category labels in declaration order.
    pub fn category_labels(&self) -> Vec<Category> {
        self.categories.iter().map(|s| s.category.clone()).collect()
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Reference to the species resource (variant listing, lineage reference).
    pub fn species(&self) -> &ResourceRef {
        &self.species
    }

    pub fn total_stats(&self) -> u32 {
        total_stats(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Creature {
        Creature::new(
            CreatureId::new(1).unwrap(),
            SpeciesName::new("bulbasaur").unwrap(),
            ResourceRef::new("species/1"),
        )
        .with_categories(vec![
            CategorySlot::new(Category::new("grass").unwrap(), "type/12".into()),
            CategorySlot::new(Category::new("poison").unwrap(), "type/4".into()),
        ])
        .with_stats(vec![Stat::new("hp", 45), Stat::new("attack", 49)])
    }

    #[test]
    fn labels_keep_declaration_order() {
        let labels: Vec<String> = bulbasaur()
            .category_labels()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(labels, vec!["Grass", "Poison"]);
    }

    #[test]
    fn total_stats_sums_values() {
        assert_eq!(bulbasaur().total_stats(), 94);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(bulbasaur()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "bulbasaur");
        assert_eq!(json["categories"][0]["category"], "Grass");
        assert!(json["sprites"]["normal"].is_null());
    }
}
