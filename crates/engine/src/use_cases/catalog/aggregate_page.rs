//! Aggregate page use case.
//!
//! Turns a page window into display-ready composite records. Base records for
//! every id are fetched concurrently; as soon as one arrives, its weaknesses,
//! forms and evolution are resolved concurrently. Sub-field failures degrade
//! that field only. A failed base fetch drops the creature and is reported in
//! `skipped`.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;

use pokedex_domain::{
    CompositeRecord, CreatureId, DegradedField, EvolutionSummary, PageWindow,
};

use super::{FetchCreature, ResolveEvolution, ResolveForms, ResolveWeaknesses};
use crate::infrastructure::ports::CatalogError;

// =============================================================================
// DTOs (Use Case Result Types)
// =============================================================================

/// An aggregated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub window: PageWindow,
    /// Composite records in ascending id order.
    pub records: Vec<CompositeRecord>,
    /// Ids whose base record could not be fetched.
    pub skipped: Vec<SkippedCreature>,
}

impl PageResult {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A creature left off the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCreature {
    pub id: CreatureId,
    pub reason: String,
    #[serde(skip)]
    pub error: CatalogError,
}

// =============================================================================
// Use Case
// =============================================================================

pub struct AggregatePage {
    fetch_creature: Arc<FetchCreature>,
    weaknesses: Arc<ResolveWeaknesses>,
    forms: Arc<ResolveForms>,
    evolution: Arc<ResolveEvolution>,
}

impl AggregatePage {
    pub fn new(
        fetch_creature: Arc<FetchCreature>,
        weaknesses: Arc<ResolveWeaknesses>,
        forms: Arc<ResolveForms>,
        evolution: Arc<ResolveEvolution>,
    ) -> Self {
        Self {
            fetch_creature,
            weaknesses,
            forms,
            evolution,
        }
    }

    /// Aggregate every id of `window`.
    ///
    /// Only returns once every creature on the page has settled.
    pub async fn execute(&self, window: PageWindow) -> PageResult {
        let ids = window.ids();
        tracing::debug!(
            page = window.page(),
            first_id = window.first_id(),
            last_id = window.last_id(),
            "Aggregating page"
        );

        let outcomes = join_all(ids.into_iter().map(|id| self.execute_one(id))).await;

        let mut result = PageResult {
            window,
            records: Vec::with_capacity(outcomes.len()),
            skipped: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Ok(record) => result.records.push(record),
                Err(skipped) => result.skipped.push(skipped),
            }
        }

        tracing::info!(
            page = window.page(),
            records = result.records.len(),
            skipped = result.skipped.len(),
            "Page aggregated"
        );
        result
    }

    /// Aggregate a single creature.
    pub async fn execute_one(&self, id: CreatureId) -> Result<CompositeRecord, SkippedCreature> {
        let creature = self.fetch_creature.execute(id).await.map_err(|e| {
            tracing::warn!(
                creature_id = %id,
                error = %e,
                "Base record unavailable, omitting creature from page"
            );
            SkippedCreature {
                id,
                reason: e.to_string(),
                error: e,
            }
        })?;

        let (weaknesses, forms, evolution) = tokio::join!(
            self.weaknesses.execute(creature.categories()),
            self.forms.execute(&creature),
            self.evolution.execute(creature.name()),
        );

        let mut degraded = Vec::new();
        let weaknesses = weaknesses.unwrap_or_else(|e| {
            tracing::warn!(creature_id = %id, error = %e, "Using partial weaknesses");
            degraded.push(DegradedField::Weaknesses);
            e.partial
        });
        let forms = forms.unwrap_or_else(|e| {
            tracing::warn!(creature_id = %id, error = %e, "Forms unavailable, using empty list");
            degraded.push(DegradedField::Forms);
            Vec::new()
        });
        let evolution = evolution.unwrap_or_else(|e| {
            tracing::warn!(creature_id = %id, error = %e, "Evolution unavailable");
            degraded.push(DegradedField::Evolution);
            EvolutionSummary::Unknown
        });

        let mut record = CompositeRecord::assemble(creature, weaknesses, forms, evolution);
        for field in degraded {
            record.mark_degraded(field);
        }
        Ok(record)
    }
}
