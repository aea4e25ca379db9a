//! Test fixtures: an in-memory catalog and helpers for building catalog data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::ScriptedCatalog;
//!
//! #[tokio::test]
//! async fn test_weaknesses() {
//!     let catalog = ScriptedCatalog::new()
//!         .with_basic_creature(4, "charmander", &["fire"])
//!         .with_category("fire", &["water", "ground", "rock"]);
//!     // ... test logic
//! }
//! ```

pub mod scripted_catalog;

pub use scripted_catalog::{
    category_ref, lineage_ref, species_ref, variant_ref, ScriptedCatalog,
};

use pokedex_domain::{CreatureId, LineageNode, PageWindow};

/// Creature id helper; panics on zero.
pub fn id(n: u32) -> CreatureId {
    CreatureId::new(n).unwrap_or_else(|e| panic!("bad fixture id {n}: {e}"))
}

/// Page window helper; panics on invalid input.
pub fn window(page: u32, page_size: u32, collection_size: u32) -> PageWindow {
    PageWindow::new(page, page_size, collection_size)
        .unwrap_or_else(|e| panic!("bad fixture window: {e}"))
}

/// Linear lineage `a -> b -> c ...`.
pub fn chain(species: &[&str]) -> LineageNode {
    let mut iter = species.iter().rev();
    let Some(last) = iter.next() else {
        panic!("chain needs at least one species");
    };
    iter.fold(LineageNode::new(*last), |child, name| {
        LineageNode::new(*name).with_successor(child)
    })
}
