//! Registry of irregular forms.
//!
//! Some variants are only published by the provider under compound string
//! identifiers and never appear in a species' variety listing. They are
//! declared here as static configuration, loaded once at process start.

use std::collections::BTreeMap;

use pokedex_domain::{CreatureId, FormId, SpriteSet};

use super::FormDescriptor;

/// Built-in table: base id and the display names of its irregular forms.
const STANDARD_IRREGULAR_FORMS: &[(u32, &[&str])] = &[
    (412, &["Sandy", "Trash"]),
    (421, &["Sunshine"]),
    (422, &["East"]),
    (423, &["East"]),
    (585, &["Autumn", "Summer", "Winter"]),
    (586, &["Autumn", "Summer", "Winter"]),
];

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularForm {
    pub base: CreatureId,
    pub id: FormId,
    pub name: String,
    pub sprite_id: String,
}

impl IrregularForm {
    /// Entry whose id and sprite id are both `"<base>-<name>"`, lower-cased.
    pub fn new(base: CreatureId, name: &str) -> Self {
        let id = FormId::irregular(base, name);
        let sprite_id = id.to_string();
        Self {
            base,
            id,
            name: name.to_string(),
            sprite_id,
        }
    }

    /// Descriptor with image references on the static asset host.
    pub fn descriptor(&self, asset_base: &str) -> FormDescriptor {
        FormDescriptor::new(
            self.id.clone(),
            self.name.clone(),
            SpriteSet::from_asset_base(asset_base, &self.sprite_id),
        )
    }
}

/// Immutable mapping from base id to its irregular forms, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct IrregularFormRegistry {
    entries: BTreeMap<CreatureId, Vec<IrregularForm>>,
}

impl IrregularFormRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in registry.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for (base, names) in STANDARD_IRREGULAR_FORMS {
            let Ok(base) = CreatureId::new(*base) else {
                continue;
            };
            for name in names.iter() {
                registry = registry.with_form(IrregularForm::new(base, name));
            }
        }
        registry
    }

    pub fn with_form(mut self, form: IrregularForm) -> Self {
        self.entries.entry(form.base).or_default().push(form);
        self
    }

    pub fn forms_for(&self, base: CreatureId) -> &[IrregularForm] {
        self.entries.get(&base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Descriptors for every irregular form of `base`, in registry order.
    pub fn descriptors_for(&self, base: CreatureId, asset_base: &str) -> Vec<FormDescriptor> {
        self.forms_for(base)
            .iter()
            .map(|form| form.descriptor(asset_base))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
