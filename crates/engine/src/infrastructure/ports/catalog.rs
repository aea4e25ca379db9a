//! Remote catalog port.

use async_trait::async_trait;
use pokedex_domain::{Creature, CreatureId, LineageNode, ResourceRef, SpeciesName};

use super::error::CatalogError;
use super::types::{CategoryRelations, SpeciesDetails, VariantDetails};

/// Read-only access to the remote creature catalog.
///
/// Every method is a single request/response exchange; callers decide how
/// failures degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Base record of one creature.
    async fn creature(&self, id: CreatureId) -> Result<Creature, CatalogError>;

    /// Damage relations of a category.
    async fn category(&self, resource: &ResourceRef) -> Result<CategoryRelations, CatalogError>;

    /// Species record by reference (variant listing, lineage reference).
    async fn species(&self, resource: &ResourceRef) -> Result<SpeciesDetails, CatalogError>;

    /// Species record by canonical name.
    async fn species_by_name(&self, name: &SpeciesName) -> Result<SpeciesDetails, CatalogError>;

    /// One variant's record.
    async fn variant(&self, resource: &ResourceRef) -> Result<VariantDetails, CatalogError>;

    /// Lineage tree rooted at its first stage.
    async fn lineage(&self, resource: &ResourceRef) -> Result<LineageNode, CatalogError>;
}
