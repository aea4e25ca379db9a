//! Time-bounded catalog wrapper
//!
//! Wraps any CatalogPort implementation so every call settles within a fixed
//! bound. A call that does not finish in time is dropped and reported as
//! `CatalogError::Timeout`, which callers treat like any other failed lookup.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use pokedex_domain::{Creature, CreatureId, LineageNode, ResourceRef, SpeciesName};

use crate::infrastructure::ports::{
    CatalogError, CatalogPort, CategoryRelations, SpeciesDetails, VariantDetails,
};

/// Default per-call bound.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Wrapper that bounds the duration of every catalog call
pub struct BoundedCatalog {
    inner: Arc<dyn CatalogPort>,
    timeout: Duration,
}

impl BoundedCatalog {
    pub fn new(inner: Arc<dyn CatalogPort>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T, F>(&self, resource: impl ToString, call: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, CatalogError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let resource = resource.to_string();
                let timeout_ms = self.timeout.as_millis() as u64;
                tracing::warn!(
                    resource = %resource,
                    timeout_ms,
                    "Catalog call exceeded its time bound"
                );
                Err(CatalogError::timeout(resource, timeout_ms))
            }
        }
    }
}

#[async_trait]
impl CatalogPort for BoundedCatalog {
    async fn creature(&self, id: CreatureId) -> Result<Creature, CatalogError> {
        self.bounded(format!("pokemon/{}", id), self.inner.creature(id))
            .await
    }

    async fn category(&self, resource: &ResourceRef) -> Result<CategoryRelations, CatalogError> {
        self.bounded(resource, self.inner.category(resource)).await
    }

    async fn species(&self, resource: &ResourceRef) -> Result<SpeciesDetails, CatalogError> {
        self.bounded(resource, self.inner.species(resource)).await
    }

    async fn species_by_name(&self, name: &SpeciesName) -> Result<SpeciesDetails, CatalogError> {
        self.bounded(
            format!("pokemon-species/{}", name),
            self.inner.species_by_name(name),
        )
        .await
    }

    async fn variant(&self, resource: &ResourceRef) -> Result<VariantDetails, CatalogError> {
        self.bounded(resource, self.inner.variant(resource)).await
    }

    async fn lineage(&self, resource: &ResourceRef) -> Result<LineageNode, CatalogError> {
        self.bounded(resource, self.inner.lineage(resource)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCatalogPort;
    use crate::test_fixtures::ScriptedCatalog;

    fn id(n: u32) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_becomes_timeout() {
        let inner = ScriptedCatalog::new()
            .with_basic_creature(1, "bulbasaur", &["grass"])
            .with_delay(format!("pokemon/{}", 1), Duration::from_secs(30));
        let bounded = BoundedCatalog::new(Arc::new(inner), Duration::from_millis(500));

        let err = bounded.creature(id(1)).await.unwrap_err();

        assert_eq!(err, CatalogError::timeout("pokemon/1", 500));
        assert!(err.is_network());
    }

    #[tokio::test(start_paused = true)]
    async fn fast_call_passes_through() {
        let inner = ScriptedCatalog::new()
            .with_basic_creature(1, "bulbasaur", &["grass"])
            .with_delay("pokemon/1", Duration::from_millis(100));
        let bounded = BoundedCatalog::new(Arc::new(inner), Duration::from_millis(500));

        let creature = bounded.creature(id(1)).await.unwrap();
        assert_eq!(creature.name().as_str(), "bulbasaur");
    }

    #[tokio::test]
    async fn inner_errors_are_not_rewritten() {
        let mut inner = MockCatalogPort::new();
        inner
            .expect_category()
            .returning(|r| Err(CatalogError::not_found(r)));
        let bounded = BoundedCatalog::new(Arc::new(inner), DEFAULT_CALL_TIMEOUT);

        let err = bounded
            .category(&ResourceRef::new("type/99"))
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::not_found("type/99"));
    }
}
