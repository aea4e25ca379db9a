//! In-memory catalog with scripted data, failures and delays.
//!
//! Every call is keyed by a resource string: `pokemon/<id>` for creatures,
//! `pokemon-species/<name>` for species, and the resource reference itself
//! for everything else. Failures and delays attach to those keys.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use pokedex_domain::{
    Category, CategorySlot, Creature, CreatureId, LineageNode, ResourceRef, SpeciesName,
    SpriteSet, Stat,
};

use crate::infrastructure::ports::{
    CatalogError, CatalogPort, CategoryRelations, SpeciesDetails, VariantDetails, VarietyRef,
};

pub fn category_ref(name: &str) -> ResourceRef {
    ResourceRef::new(format!("type/{}", name))
}

pub fn species_ref(name: &str) -> ResourceRef {
    ResourceRef::new(format!("pokemon-species/{}", name))
}

pub fn variant_ref(name: &str) -> ResourceRef {
    ResourceRef::new(format!("variant/{}", name))
}

pub fn lineage_ref(root: &str) -> ResourceRef {
    ResourceRef::new(format!("evolution-chain/{}", root))
}

fn creature_key(id: CreatureId) -> String {
    format!("pokemon/{}", id)
}

#[derive(Default)]
pub struct ScriptedCatalog {
    creatures: HashMap<String, Creature>,
    categories: HashMap<String, CategoryRelations>,
    species: HashMap<String, SpeciesDetails>,
    variants: HashMap<String, VariantDetails>,
    lineages: HashMap<String, LineageNode>,
    failures: HashMap<String, CatalogError>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creature with the given categories, stats `hp=45 attack=49` and a
    /// species reference of `pokemon-species/<name>`.
    pub fn with_basic_creature(mut self, id: u32, name: &str, categories: &[&str]) -> Self {
        let creature_id = super::id(id);
        let slots = categories
            .iter()
            .map(|c| {
                let category = Category::new(*c)
                    .unwrap_or_else(|e| panic!("bad fixture category {c}: {e}"));
                CategorySlot::new(category, category_ref(c))
            })
            .collect();
        let creature = Creature::new(creature_id, species_name(name), species_ref(name))
            .with_categories(slots)
            .with_stats(vec![Stat::new("hp", 45), Stat::new("attack", 49)])
            .with_sprites(SpriteSet::new(
                Some(format!("https://img/{}.png", id)),
                Some(format!("https://img/shiny/{}.png", id)),
            ));
        self.creatures.insert(creature_key(creature_id), creature);
        self
    }

    pub fn with_category(mut self, name: &str, double_damage_from: &[&str]) -> Self {
        let relations = CategoryRelations {
            category: fixture_category(name),
            double_damage_from: double_damage_from.iter().map(|c| fixture_category(c)).collect(),
        };
        self.categories
            .insert(category_ref(name).to_string(), relations);
        self
    }

    /// Species whose varieties are `(name, numeric id)` pairs; the first one is
    /// the default variety. `lineage` names the root of a registered lineage.
    pub fn with_species(
        mut self,
        name: &str,
        varieties: &[(&str, u32)],
        lineage: Option<&str>,
    ) -> Self {
        let details = SpeciesDetails {
            name: species_name(name),
            varieties: varieties
                .iter()
                .enumerate()
                .map(|(i, (variety, _))| VarietyRef {
                    name: variety.to_string(),
                    resource: variant_ref(variety),
                    is_default: i == 0,
                })
                .collect(),
            lineage: lineage.map(lineage_ref),
        };
        self.species.insert(species_ref(name).to_string(), details);
        for (variety, numeric_id) in varieties {
            self.variants.insert(
                variant_ref(variety).to_string(),
                VariantDetails {
                    id: *numeric_id,
                    name: variety.to_string(),
                    sprites: SpriteSet::new(Some(format!("https://img/{}.png", numeric_id)), None),
                },
            );
        }
        self
    }

    /// Registers `lineage` under the name of its root species.
    pub fn with_lineage(mut self, lineage: LineageNode) -> Self {
        self.lineages
            .insert(lineage_ref(&lineage.species).to_string(), lineage);
        self
    }

    /// Every call for `key` fails with `error`.
    pub fn with_failure(mut self, key: impl ToString, error: CatalogError) -> Self {
        self.failures.insert(key.to_string(), error);
        self
    }

    /// Every call for `key` sleeps for `delay` before answering.
    pub fn with_delay(mut self, key: impl ToString, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    /// Keys of every call made so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn call_count(&self, key: &str) -> usize {
        self.calls().iter().filter(|k| k.as_str() == key).count()
    }

    async fn answer<T: Clone>(
        &self,
        key: String,
        table: &HashMap<String, T>,
    ) -> Result<T, CatalogError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(key.clone());

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.failures.get(&key) {
            return Err(error.clone());
        }
        table
            .get(&key)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(key))
    }
}

fn species_name(name: &str) -> SpeciesName {
    SpeciesName::new(name).unwrap_or_else(|e| panic!("bad fixture species {name}: {e}"))
}

fn fixture_category(name: &str) -> Category {
    Category::new(name).unwrap_or_else(|e| panic!("bad fixture category {name}: {e}"))
}

#[async_trait]
impl CatalogPort for ScriptedCatalog {
    async fn creature(&self, id: CreatureId) -> Result<Creature, CatalogError> {
        self.answer(creature_key(id), &self.creatures).await
    }

    async fn category(&self, resource: &ResourceRef) -> Result<CategoryRelations, CatalogError> {
        self.answer(resource.to_string(), &self.categories).await
    }

    async fn species(&self, resource: &ResourceRef) -> Result<SpeciesDetails, CatalogError> {
        self.answer(resource.to_string(), &self.species).await
    }

    async fn species_by_name(&self, name: &SpeciesName) -> Result<SpeciesDetails, CatalogError> {
        self.answer(species_ref(name.as_str()).to_string(), &self.species)
            .await
    }

    async fn variant(&self, resource: &ResourceRef) -> Result<VariantDetails, CatalogError> {
        self.answer(resource.to_string(), &self.variants).await
    }

    async fn lineage(&self, resource: &ResourceRef) -> Result<LineageNode, CatalogError> {
        self.answer(resource.to_string(), &self.lineages).await
    }
}
