//! PokeAPI catalog client
//!
//! Implements the CatalogPort trait over the provider's REST API. Each call is
//! one GET decoded from JSON; HTTP 404 maps to `NotFound`, other failures to
//! `Network`, and decode or validation failures to `Schema`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use pokedex_domain::{
    Category, CategorySlot, Creature, CreatureId, LineageNode, ResourceRef, SpeciesName,
    SpriteSet, Stat,
};

use crate::infrastructure::ports::{
    CatalogError, CatalogPort, CategoryRelations, SpeciesDetails, VariantDetails, VarietyRef,
};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokeAPI REST catalog
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn creature_url(&self, id: CreatureId) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    fn species_url(&self, name: &SpeciesName) -> String {
        format!("{}/pokemon-species/{}", self.base_url, name.as_str())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::trace!(url = %url, "Fetching catalog resource");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::timeout(url, self.timeout.as_millis() as u64)
            } else {
                CatalogError::network(url, e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::not_found(url));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::network(
                url,
                format!("HTTP {}: {}", status, error_text),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::network(url, e))?;
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::schema(url, e))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl CatalogPort for PokeApiClient {
    async fn creature(&self, id: CreatureId) -> Result<Creature, CatalogError> {
        let url = self.creature_url(id);
        let doc: PokemonDoc = self.get_json(&url).await?;
        convert_pokemon(id, doc).map_err(|message| CatalogError::schema(&url, message))
    }

    async fn category(&self, resource: &ResourceRef) -> Result<CategoryRelations, CatalogError> {
        let doc: TypeDoc = self.get_json(resource.as_str()).await?;
        convert_type(doc).map_err(|message| CatalogError::schema(resource, message))
    }

    async fn species(&self, resource: &ResourceRef) -> Result<SpeciesDetails, CatalogError> {
        let doc: SpeciesDoc = self.get_json(resource.as_str()).await?;
        convert_species(doc).map_err(|message| CatalogError::schema(resource, message))
    }

    async fn species_by_name(&self, name: &SpeciesName) -> Result<SpeciesDetails, CatalogError> {
        let url = self.species_url(name);
        let doc: SpeciesDoc = self.get_json(&url).await?;
        convert_species(doc).map_err(|message| CatalogError::schema(&url, message))
    }

    async fn variant(&self, resource: &ResourceRef) -> Result<VariantDetails, CatalogError> {
        let doc: VariantDoc = self.get_json(resource.as_str()).await?;
        Ok(VariantDetails {
            id: doc.id,
            name: doc.name,
            sprites: doc.sprites.into(),
        })
    }

    async fn lineage(&self, resource: &ResourceRef) -> Result<LineageNode, CatalogError> {
        let doc: EvolutionChainDoc = self.get_json(resource.as_str()).await?;
        Ok(doc.chain.into())
    }
}

fn convert_pokemon(requested: CreatureId, doc: PokemonDoc) -> Result<Creature, String> {
    if doc.id != requested.get() {
        return Err(format!(
            "requested creature {} but received {}",
            requested, doc.id
        ));
    }
    let name = SpeciesName::new(doc.species.name).map_err(|e| e.to_string())?;

    let mut slots = doc.types;
    slots.sort_by_key(|t| t.slot);
    let categories = slots
        .into_iter()
        .map(|t| {
            Category::new(t.kind.name)
                .map(|category| CategorySlot::new(category, ResourceRef::new(t.kind.url)))
                .map_err(|e| e.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stats = doc
        .stats
        .into_iter()
        .map(|s| Stat::new(s.stat.name, s.base_stat))
        .collect();

    Ok(Creature::new(requested, name, ResourceRef::new(doc.species.url))
        .with_categories(categories)
        .with_stats(stats)
        .with_sprites(doc.sprites.into()))
}

fn convert_type(doc: TypeDoc) -> Result<CategoryRelations, String> {
    let category = Category::new(doc.name).map_err(|e| e.to_string())?;
    let double_damage_from = doc
        .damage_relations
        .double_damage_from
        .into_iter()
        .map(|r| Category::new(r.name).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CategoryRelations {
        category,
        double_damage_from,
    })
}

fn convert_species(doc: SpeciesDoc) -> Result<SpeciesDetails, String> {
    let name = SpeciesName::new(doc.name).map_err(|e| e.to_string())?;
    let varieties = doc
        .varieties
        .into_iter()
        .map(|v| VarietyRef {
            name: v.pokemon.name,
            resource: ResourceRef::new(v.pokemon.url),
            is_default: v.is_default,
        })
        .collect();
    Ok(SpeciesDetails {
        name,
        varieties,
        lineage: doc.evolution_chain.map(|c| ResourceRef::new(c.url)),
    })
}

// =============================================================================
// PokeAPI wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct UrlResource {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SpritesDoc {
    front_default: Option<String>,
    front_shiny: Option<String>,
}

impl From<SpritesDoc> for SpriteSet {
    fn from(doc: SpritesDoc) -> Self {
        SpriteSet::new(doc.front_default, doc.front_shiny)
    }
}

#[derive(Debug, Deserialize)]
struct PokemonDoc {
    id: u32,
    species: NamedResource,
    types: Vec<TypeSlotDoc>,
    stats: Vec<StatDoc>,
    sprites: SpritesDoc,
}

#[derive(Debug, Deserialize)]
struct TypeSlotDoc {
    #[serde(default)]
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatDoc {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeDoc {
    name: String,
    damage_relations: DamageRelationsDoc,
}

#[derive(Debug, Deserialize)]
struct DamageRelationsDoc {
    double_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct SpeciesDoc {
    name: String,
    varieties: Vec<VarietyDoc>,
    evolution_chain: Option<UrlResource>,
}

#[derive(Debug, Deserialize)]
struct VarietyDoc {
    #[serde(default)]
    is_default: bool,
    pokemon: NamedResource,
}

#[derive(Debug, Deserialize)]
struct VariantDoc {
    id: u32,
    name: String,
    sprites: SpritesDoc,
}

#[derive(Debug, Deserialize)]
struct EvolutionChainDoc {
    chain: ChainLinkDoc,
}

#[derive(Debug, Deserialize)]
struct ChainLinkDoc {
    species: NamedResource,
    evolves_to: Vec<ChainLinkDoc>,
}

impl From<ChainLinkDoc> for LineageNode {
    fn from(doc: ChainLinkDoc) -> Self {
        LineageNode {
            species: doc.species.name,
            evolves_to: doc.evolves_to.into_iter().map(LineageNode::from).collect(),
        }
    }
}
