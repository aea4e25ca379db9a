//! Categories a creature takes amplified damage from.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Order-preserving, duplicate-free set of categories.
///
/// Insertion keeps the first occurrence of a label and drops later repeats,
/// so the union of per-category vulnerability lists keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weaknesses(Vec<Category>);

impl Weaknesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the category was not already present.
    pub fn insert(&mut self, category: Category) -> bool {
        if self.0.contains(&category) {
            return false;
        }
        self.0.push(category);
        true
    }

    pub fn extend_from<I: IntoIterator<Item = Category>>(&mut self, categories: I) {
        for category in categories {
            self.insert(category);
        }
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.0.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    /// Comma-joined display string, e.g. `"Water, Ground, Rock"`.
    pub fn display(&self) -> String {
        self.0
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Category> for Weaknesses {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut weaknesses = Self::new();
        weaknesses.extend_from(iter);
        weaknesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(labels: &[&str]) -> Vec<Category> {
        labels.iter().map(|l| Category::new(*l).unwrap()).collect()
    }

    #[test]
    fn union_keeps_first_seen_order_without_duplicates() {
        let mut weaknesses: Weaknesses = cats(&["fire", "flying", "ice", "psychic"]).into_iter().collect();
        weaknesses.extend_from(cats(&["ground", "psychic", "fire"]));

        assert_eq!(weaknesses.display(), "Fire, Flying, Ice, Psychic, Ground");
        assert_eq!(weaknesses.len(), 5);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut weaknesses = Weaknesses::new();
        assert!(weaknesses.insert(Category::new("water").unwrap()));
        assert!(!weaknesses.insert(Category::new("Water").unwrap()));
        assert!(weaknesses.contains(&Category::new("water").unwrap()));
    }

    #[test]
    fn serializes_as_plain_list() {
        let weaknesses: Weaknesses = cats(&["water", "rock"]).into_iter().collect();
        assert_eq!(
            serde_json::to_string(&weaknesses).unwrap(),
            r#"["Water","Rock"]"#
        );
    }
}
