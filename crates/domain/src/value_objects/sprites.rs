//! Image references for normal and alternate ("shiny") palettes.

use serde::{Deserialize, Serialize};

/// Which palette the viewer is currently showing.
///
/// Selecting a palette is a render-time choice over a [`SpriteSet`] that was
/// already fetched; it never triggers another fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    Normal,
    Shiny,
}

impl Palette {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Shiny,
            Self::Shiny => Self::Normal,
        }
    }
}

/// Normal and alternate-palette image references.
///
/// Either may be absent: the provider publishes `null` for creatures without art.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub normal: Option<String>,
    pub shiny: Option<String>,
}

impl SpriteSet {
    pub fn new(normal: Option<String>, shiny: Option<String>) -> Self {
        Self { normal, shiny }
    }

    /// Deterministic paths on the static asset host:
    /// `{base}/pokemon/{sprite}.png` and `{base}/pokemon/shiny/{sprite}.png`,
    /// with the sprite identifier lower-cased.
    pub fn from_asset_base(asset_base: &str, sprite_id: &str) -> Self {
        let base = asset_base.trim_end_matches('/');
        let sprite = sprite_id.to_lowercase();
        Self {
            normal: Some(format!("{}/pokemon/{}.png", base, sprite)),
            shiny: Some(format!("{}/pokemon/shiny/{}.png", base, sprite)),
        }
    }

    pub fn select(&self, palette: Palette) -> Option<&str> {
        match palette {
            Palette::Normal => self.normal.as_deref(),
            Palette::Shiny => self.shiny.as_deref(),
        }
    }
}
