//! Base statistics of a creature.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::capitalize;

/// Statistic name as published by the provider (`"hp"`, `"special-attack"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatName(String);

impl StatName {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label used by the viewer.
    pub fn display_name(&self) -> String {
        match self.0.to_lowercase().as_str() {
            "hp" => "HP".to_string(),
            "special-attack" => "Special-Attack".to_string(),
            "special-defense" => "Special-Defense".to_string(),
            _ => capitalize(&self.0),
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// One (statistic name, integer value) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: StatName,
    pub value: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: StatName::new(name),
            value,
        }
    }
}

/// Exact sum of all statistic values.
pub fn total_stats(stats: &[Stat]) -> u32 {
    stats.iter().map(|s| s.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_follow_viewer_conventions() {
        assert_eq!(StatName::new("hp").display_name(), "HP");
        assert_eq!(StatName::new("special-attack").display_name(), "Special-Attack");
        assert_eq!(StatName::new("Special-Defense").display_name(), "Special-Defense");
        assert_eq!(StatName::new("speed").display_name(), "Speed");
    }

    #[test]
    fn total_is_exact_sum() {
        let stats = vec![
            Stat::new("hp", 45),
            Stat::new("attack", 49),
            Stat::new("defense", 49),
            Stat::new("special-attack", 65),
            Stat::new("special-defense", 65),
            Stat::new("speed", 45),
        ];
        assert_eq!(total_stats(&stats), 318);
        assert_eq!(total_stats(&[]), 0);
    }
}
