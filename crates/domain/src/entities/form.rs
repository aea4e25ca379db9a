//! Form (variant) descriptors and the naming rules applied to them.

use serde::{Deserialize, Serialize};
use pokedex_domain::{common::capitalize, FormId, SpeciesName, SpriteSet};

/// Label used when a variant's name is exactly the base species name.
pub const DEFAULT_FORM_NAME: &str = "Default";

/// One alternate depiction of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub id: FormId,
    pub name: String,
    pub sprites: SpriteSet,
}

impl FormDescriptor {
    pub fn new(id: FormId, name: impl Into<String>, sprites: SpriteSet) -> Self {
        Self {
            id,
            name: name.into(),
            sprites,
        }
    }
}

/// Display name of a variant: the base-name prefix is stripped, the remainder
/// capitalized, and an empty remainder becomes [`DEFAULT_FORM_NAME`].
///
/// `"charizard-mega-x"` under base `"charizard"` becomes `"Mega-x"`;
/// `"charizard"` itself becomes `"Default"`.
pub fn derive_form_name(variant_name: &str, base: &SpeciesName) -> String {
    let variant = variant_name.trim().to_lowercase();
    let remainder = match variant.strip_prefix(base.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with('-') => rest.trim_start_matches('-'),
        _ => variant.as_str(),
    };
    if remainder.is_empty() {
        DEFAULT_FORM_NAME.to_string()
    } else {
        capitalize(remainder)
    }
}

/// Whether a derived form name carries the excluded regional tag (case-insensitive).
pub fn is_excluded_form(form_name: &str, excluded_tag: &str) -> bool {
    !excluded_tag.is_empty() && form_name.to_lowercase().contains(&excluded_tag.to_lowercase())
}
