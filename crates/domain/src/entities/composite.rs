//! Composite record - the display-ready aggregation of one creature.

use serde::{Deserialize, Serialize};

use pokedex_domain::{EvolutionSummary, Weaknesses};

use super::{Creature, FormDescriptor};

/// A sub-field that fell back to its default because its fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedField {
    Weaknesses,
    Forms,
    Evolution,
}

/// Creature + weaknesses + forms + evolution summary + stat total.
///
/// Only built once every sub-fetch for the creature has settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeRecord {
    pub creature: Creature,
    pub weaknesses: Weaknesses,
    pub forms: Vec<FormDescriptor>,
    pub evolution: EvolutionSummary,
    pub total_stats: u32,
    pub degraded: Vec<DegradedField>,
}

impl CompositeRecord {
    pub fn assemble(
        creature: Creature,
        weaknesses: Weaknesses,
        forms: Vec<FormDescriptor>,
        evolution: EvolutionSummary,
    ) -> Self {
        let total_stats = creature.total_stats();
        Self {
            creature,
            weaknesses,
            forms,
            evolution,
            total_stats,
            degraded: Vec::new(),
        }
    }

    pub fn mark_degraded(&mut self, field: DegradedField) {
        if !self.degraded.contains(&field) {
            self.degraded.push(field);
        }
    }

    pub fn is_degraded(&self, field: DegradedField) -> bool {
        self.degraded.contains(&field)
    }

    /// Recompute the stat total from the creature's stats.
    pub fn recompute_total(&mut self) -> u32 {
        self.total_stats = self.creature.total_stats();
        self.total_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_domain::{CreatureId, ResourceRef, SpeciesName, Stat};

    fn record() -> CompositeRecord {
        let creature = Creature::new(
            CreatureId::new(4).unwrap(),
            SpeciesName::new("charmander").unwrap(),
            ResourceRef::new("species/4"),
        )
        .with_stats(vec![
            Stat::new("hp", 39),
            Stat::new("attack", 52),
            Stat::new("defense", 43),
            Stat::new("special-attack", 60),
            Stat::new("special-defense", 50),
            Stat::new("speed", 65),
        ]);
        CompositeRecord::assemble(
            creature,
            Weaknesses::new(),
            Vec::new(),
            EvolutionSummary::DoesNotEvolve,
        )
    }

    #[test]
    fn total_is_sum_and_recompute_is_idempotent() {
        let mut record = record();
        assert_eq!(record.total_stats, 309);
        assert_eq!(record.recompute_total(), 309);
        assert_eq!(record.recompute_total(), 309);
    }

    #[test]
    fn degraded_fields_are_recorded_once() {
        let mut record = record();
        record.mark_degraded(DegradedField::Forms);
        record.mark_degraded(DegradedField::Forms);
        assert_eq!(record.degraded, vec![DegradedField::Forms]);
        assert!(record.is_degraded(DegradedField::Forms));
        assert!(!record.is_degraded(DegradedField::Evolution));
    }
}
