//! Resolve evolution use case.

use std::sync::Arc;

use pokedex_domain::{EvolutionSummary, SpeciesName};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// Finds the immediate next stage(s) of a species in its lineage.
///
/// A species without a lineage reference does not evolve. Fetch failures are
/// returned so the caller can tell them apart from a real terminal stage.
pub struct ResolveEvolution {
    catalog: Arc<dyn CatalogPort>,
}

impl ResolveEvolution {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, name: &SpeciesName) -> Result<EvolutionSummary, CatalogError> {
        let species = self.catalog.species_by_name(name).await?;
        let Some(lineage_ref) = species.lineage else {
            return Ok(EvolutionSummary::DoesNotEvolve);
        };
        let lineage = self.catalog.lineage(&lineage_ref).await?;
        Ok(lineage.summarize(name))
    }
}
