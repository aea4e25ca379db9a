//! Catalog use cases.
//!
//! Leaf resolvers (`FetchCreature`, `ResolveWeaknesses`, `ResolveForms`,
//! `ResolveEvolution`) each make the catalog calls for one sub-field;
//! `AggregatePage` composes them per creature and `PageLoader` guards the
//! displayed page against stale loads.

mod aggregate_page;
mod evolution;
mod fetch_creature;
mod forms;
mod page_loader;
mod weaknesses;

pub use aggregate_page::{AggregatePage, PageResult, SkippedCreature};
pub use evolution::ResolveEvolution;
pub use fetch_creature::FetchCreature;
pub use forms::{FormSettings, ResolveForms};
pub use page_loader::{Navigation, PageLoadError, PageLoader, PaginationSettings};
pub use weaknesses::{PartialWeaknessData, ResolveWeaknesses};

use std::sync::Arc;

use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::ports::CatalogPort;

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub fetch_creature: Arc<FetchCreature>,
    pub resolve_weaknesses: Arc<ResolveWeaknesses>,
    pub resolve_forms: Arc<ResolveForms>,
    pub resolve_evolution: Arc<ResolveEvolution>,
    pub aggregate_page: Arc<AggregatePage>,
    pub page_loader: Arc<PageLoader>,
}

impl CatalogUseCases {
    /// Wire every catalog use case against one catalog port.
    pub fn new(catalog: Arc<dyn CatalogPort>, config: &CatalogConfig) -> Self {
        let fetch_creature = Arc::new(FetchCreature::new(catalog.clone(), config.collection_size));
        let resolve_weaknesses = Arc::new(ResolveWeaknesses::new(catalog.clone()));
        let resolve_forms = Arc::new(ResolveForms::new(
            catalog.clone(),
            FormSettings {
                excluded_tag: config.excluded_form_tag.clone(),
                sprite_asset_base: config.sprite_asset_base.clone(),
                registry: config.irregular_forms.clone(),
            },
        ));
        let resolve_evolution = Arc::new(ResolveEvolution::new(catalog));
        let aggregate_page = Arc::new(AggregatePage::new(
            fetch_creature.clone(),
            resolve_weaknesses.clone(),
            resolve_forms.clone(),
            resolve_evolution.clone(),
        ));
        let page_loader = Arc::new(PageLoader::new(
            aggregate_page.clone(),
            PaginationSettings {
                collection_size: config.collection_size,
                page_size: config.page_size,
                max_page_size: config.max_page_size,
            },
        ));

        Self {
            fetch_creature,
            resolve_weaknesses,
            resolve_forms,
            resolve_evolution,
            aggregate_page,
            page_loader,
        }
    }
}
