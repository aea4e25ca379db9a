//! Value objects for the catalog domain.

mod category;
mod evolution;
mod names;
mod page;
mod resource;
mod sprites;
mod stat;
mod weaknesses;

pub use category::Category;
pub use evolution::EvolutionSummary;
pub use names::SpeciesName;
pub use page::PageWindow;
pub use resource::ResourceRef;
pub use sprites::{Palette, SpriteSet};
pub use stat::{total_stats, Stat, StatName};
pub use weaknesses::Weaknesses;
