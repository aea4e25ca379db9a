//! Resolve forms use case.
//!
//! Builds a creature's forms list from two sources: the standard varieties
//! listed on its species record (each fetched for its images), followed by
//! the irregular forms declared in the registry for its id.

use std::sync::Arc;

use futures_util::future::try_join_all;

use pokedex_domain::{
    derive_form_name, is_excluded_form, Creature, FormDescriptor, FormId, IrregularFormRegistry,
};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// Static settings for form resolution.
#[derive(Debug, Clone)]
pub struct FormSettings {
    pub excluded_tag: String,
    pub sprite_asset_base: String,
    pub registry: IrregularFormRegistry,
}

pub struct ResolveForms {
    catalog: Arc<dyn CatalogPort>,
    settings: FormSettings,
}

impl ResolveForms {
    pub fn new(catalog: Arc<dyn CatalogPort>, settings: FormSettings) -> Self {
        Self { catalog, settings }
    }

    /// Execute the use case.
    ///
    /// Standard forms come first in provider listing order, then irregular
    /// forms in registry order. Any failed fetch fails the whole list.
    pub async fn execute(&self, creature: &Creature) -> Result<Vec<FormDescriptor>, CatalogError> {
        let species = self.catalog.species(creature.species()).await?;

        let retained: Vec<_> = species
            .varieties
            .iter()
            .filter_map(|variety| {
                let name = derive_form_name(&variety.name, creature.name());
                if is_excluded_form(&name, &self.settings.excluded_tag) {
                    tracing::debug!(
                        creature_id = %creature.id(),
                        variety = %variety.name,
                        "Skipping excluded regional form"
                    );
                    None
                } else {
                    Some((name, &variety.resource))
                }
            })
            .collect();

        let details = try_join_all(
            retained
                .iter()
                .map(|(_, resource)| self.catalog.variant(resource)),
        )
        .await?;

        let mut forms: Vec<FormDescriptor> = retained
            .into_iter()
            .zip(details)
            .map(|((name, _), variant)| {
                FormDescriptor::new(FormId::Numeric(variant.id), name, variant.sprites)
            })
            .collect();

        forms.extend(
            self.settings
                .registry
                .descriptors_for(creature.id(), &self.settings.sprite_asset_base),
        );

        Ok(forms)
    }
}
