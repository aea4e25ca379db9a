//! Evolution summary shown for each creature.

use serde::{Deserialize, Serialize};

/// Immediate next stage(s) of a creature's lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "into", rename_all = "snake_case")]
pub enum EvolutionSummary {
    /// Terminal stage, or the creature is absent from its own lineage graph.
    DoesNotEvolve,
    /// Display names of the immediate successors, in lineage order.
    EvolvesInto(Vec<String>),
    /// The lineage could not be fetched; not the same as a terminal stage.
    Unknown,
}

impl EvolutionSummary {
    pub fn evolves(&self) -> bool {
        matches!(self, Self::EvolvesInto(_))
    }

    /// Successor names joined with `", "`, or `None` when there are none.
    pub fn successors(&self) -> Option<String> {
        match self {
            Self::EvolvesInto(names) => Some(names.join(", ")),
            _ => None,
        }
    }

    /// Human-readable line for the viewer.
    pub fn display(&self) -> String {
        match self {
            Self::EvolvesInto(names) => format!("Can evolve into: {}", names.join(", ")),
            Self::DoesNotEvolve => "Does not evolve".to_string(),
            Self::Unknown => "Evolution unknown".to_string(),
        }
    }
}
