//! Resolve weaknesses use case.
//!
//! Unions the "takes double damage from" lists of every category a creature
//! has, in first-seen order. All category lookups run concurrently.

use std::sync::Arc;

use futures_util::future::join_all;

use pokedex_domain::{Category, CategorySlot, Weaknesses};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// One or more category lookups failed.
///
/// `partial` holds the union of the lookups that did succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Weakness data incomplete: {} of {attempted} category lookups failed", .failed.len())]
pub struct PartialWeaknessData {
    pub partial: Weaknesses,
    pub failed: Vec<(Category, CatalogError)>,
    pub attempted: usize,
}

pub struct ResolveWeaknesses {
    catalog: Arc<dyn CatalogPort>,
}

impl ResolveWeaknesses {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(
        &self,
        categories: &[CategorySlot],
    ) -> Result<Weaknesses, PartialWeaknessData> {
        let lookups = categories
            .iter()
            .map(|slot| self.catalog.category(&slot.resource));
        let outcomes = join_all(lookups).await;

        let mut weaknesses = Weaknesses::new();
        let mut failed = Vec::new();
        for (slot, outcome) in categories.iter().zip(outcomes) {
            match outcome {
                Ok(relations) => weaknesses.extend_from(relations.double_damage_from),
                Err(e) => failed.push((slot.category.clone(), e)),
            }
        }

        if failed.is_empty() {
            Ok(weaknesses)
        } else {
            Err(PartialWeaknessData {
                partial: weaknesses,
                failed,
                attempted: categories.len(),
            })
        }
    }
}
