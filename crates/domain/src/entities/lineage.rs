//! Evolutionary lineage graph.
//!
//! The provider publishes each lineage as a tree rooted at the first stage.
//! Traversal is iterative with a visited guard, so it makes no assumption
//! about depth or branching.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use pokedex_domain::{common::capitalize, EvolutionSummary, SpeciesName};

/// One stage of a lineage and its immediate successors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageNode {
    pub species: String,
    pub evolves_to: Vec<LineageNode>,
}

impl LineageNode {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_successor(mut self, successor: LineageNode) -> Self {
        self.evolves_to.push(successor);
        self
    }

    /// Depth-first, pre-order search for the stage named `species`.
    ///
    /// Children are visited in declared order. A species name already
    /// expanded is not expanded again.
    pub fn find(&self, species: &str) -> Option<&LineageNode> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&LineageNode> = vec![self];

        while let Some(node) = stack.pop() {
            if node.species.eq_ignore_ascii_case(species) {
                return Some(node);
            }
            if !visited.insert(node.species.as_str()) {
                continue;
            }
            stack.extend(node.evolves_to.iter().rev());
        }
        None
    }

    /// Summary of the immediate next stage(s) of `species` within this lineage.
    pub fn summarize(&self, species: &SpeciesName) -> EvolutionSummary {
        match self.find(species.as_str()) {
            Some(node) if !node.evolves_to.is_empty() => EvolutionSummary::EvolvesInto(
                node.evolves_to
                    .iter()
                    .map(|n| capitalize(&n.species))
                    .collect(),
            ),
            _ => EvolutionSummary::DoesNotEvolve,
        }
    }
}
