//! Fetch creature use case.
//!
//! Retrieves one creature's base record by catalog number. Failures are
//! returned to the caller unchanged; there are no retries.

use std::sync::Arc;

use pokedex_domain::{Creature, CreatureId};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

pub struct FetchCreature {
    catalog: Arc<dyn CatalogPort>,
    collection_size: u32,
}

impl FetchCreature {
    pub fn new(catalog: Arc<dyn CatalogPort>, collection_size: u32) -> Self {
        Self {
            catalog,
            collection_size,
        }
    }

    /// Execute the fetch.
    ///
    /// # Returns
    /// * `Ok(Creature)` - The base record
    /// * `Err(CatalogError::NotFound)` - Id outside the collection, or unknown to the provider
    /// * `Err(CatalogError)` - Network, timeout or schema failure
    pub async fn execute(&self, id: CreatureId) -> Result<Creature, CatalogError> {
        if id.get() > self.collection_size {
            return Err(CatalogError::not_found(format!("pokemon/{}", id)));
        }
        self.catalog.creature(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCatalogPort;
    use crate::test_fixtures::{id, ScriptedCatalog};

    #[tokio::test]
    async fn returns_base_record() {
        let catalog = ScriptedCatalog::new().with_basic_creature(25, "pikachu", &["electric"]);
        let use_case = FetchCreature::new(Arc::new(catalog), 1025);

        let creature = use_case.execute(id(25)).await.unwrap();

        assert_eq!(creature.id(), id(25));
        assert_eq!(creature.name().display_name(), "Pikachu");
    }

    #[tokio::test]
    async fn ids_past_the_collection_are_not_requested() {
        let mut catalog = MockCatalogPort::new();
        catalog.expect_creature().never();
        let use_case = FetchCreature::new(Arc::new(catalog), 151);

        let err = use_case.execute(id(152)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_creature()
            .times(1)
            .returning(|_| Err(CatalogError::schema("pokemon/7", "missing stats")));
        let use_case = FetchCreature::new(Arc::new(catalog), 1025);

        let err = use_case.execute(id(7)).await.unwrap_err();
        assert_eq!(err, CatalogError::schema("pokemon/7", "missing stats"));
    }
}
