//! Runtime configuration loaded from the environment.
//!
//! Every value has a default so the engine starts with no environment at all.
//! Unparseable numbers fall back to their default with a warning instead of
//! aborting startup.

use std::time::Duration;

use pokedex_domain::IrregularFormRegistry;

use super::bounded_catalog::DEFAULT_CALL_TIMEOUT;
use super::pokeapi::DEFAULT_POKEAPI_BASE_URL;

pub const DEFAULT_SPRITE_ASSET_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites";
pub const DEFAULT_COLLECTION_SIZE: u32 = 1025;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 50;
pub const DEFAULT_EXCLUDED_FORM_TAG: &str = "west";

/// Settings for the catalog pipeline.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub sprite_asset_base: String,
    pub collection_size: u32,
    pub page_size: u32,
    pub max_page_size: u32,
    pub request_timeout: Duration,
    /// Variant names containing this tag are left out of forms lists.
    pub excluded_form_tag: String,
    pub irregular_forms: IrregularFormRegistry,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            sprite_asset_base: DEFAULT_SPRITE_ASSET_BASE.to_string(),
            collection_size: DEFAULT_COLLECTION_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            request_timeout: DEFAULT_CALL_TIMEOUT,
            excluded_form_tag: DEFAULT_EXCLUDED_FORM_TAG.to_string(),
            irregular_forms: IrregularFormRegistry::standard(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = CatalogConfig::default();
        let collection_size = parse_positive(&get, "COLLECTION_SIZE", defaults.collection_size);
        let max_page_size = parse_positive(&get, "MAX_PAGE_SIZE", defaults.max_page_size);
        let mut page_size = parse_positive(&get, "PAGE_SIZE", defaults.page_size);
        if page_size > max_page_size {
            tracing::warn!(
                page_size,
                max_page_size,
                "PAGE_SIZE exceeds MAX_PAGE_SIZE, clamping"
            );
            page_size = max_page_size;
        }
        let timeout_ms = parse_positive(
            &get,
            "REQUEST_TIMEOUT_MS",
            defaults.request_timeout.as_millis() as u64,
        );

        let catalog = CatalogConfig {
            base_url: get("POKEAPI_BASE_URL").unwrap_or(defaults.base_url),
            sprite_asset_base: get("SPRITE_ASSET_BASE").unwrap_or(defaults.sprite_asset_base),
            collection_size,
            page_size,
            max_page_size,
            request_timeout: Duration::from_millis(timeout_ms),
            // An explicitly empty tag disables exclusion.
            excluded_form_tag: lookup("EXCLUDED_FORM_TAG")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.excluded_form_tag),
            irregular_forms: defaults.irregular_forms,
        };

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: get("SERVER_HOST").unwrap_or(server_defaults.host),
            port: get("SERVER_PORT")
                .or_else(|| get("PORT"))
                .map(|raw| parse_or_default("SERVER_PORT", &raw, server_defaults.port))
                .unwrap_or(server_defaults.port),
        };

        Self { catalog, server }
    }
}

fn parse_positive<T, G>(get: &G, key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default + Copy + std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => {
            let value = parse_or_default(key, &raw, default);
            if value == T::default() {
                tracing::warn!(key, default = %default, "Value must be positive, using default");
                default
            } else {
                value
            }
        }
        None => default,
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, default = %default, "Invalid number, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.collection_size, 1025);
        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.catalog.request_timeout, Duration::from_secs(10));
        assert_eq!(config.catalog.excluded_form_tag, "west");
        assert!(!config.catalog.irregular_forms.is_empty());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("POKEAPI_BASE_URL", "http://localhost:8080/api/v2"),
            ("COLLECTION_SIZE", "151"),
            ("PAGE_SIZE", "12"),
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("EXCLUDED_FORM_TAG", "Alola"),
            ("SERVER_PORT", "8081"),
        ]);
        assert_eq!(config.catalog.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.catalog.collection_size, 151);
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.catalog.excluded_form_tag, "alola");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("COLLECTION_SIZE", "lots"),
            ("PAGE_SIZE", "0"),
            ("SERVER_PORT", "99999"),
        ]);
        assert_eq!(config.catalog.collection_size, 1025);
        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn page_size_is_clamped_to_max() {
        let config = config_from(&[("PAGE_SIZE", "80"), ("MAX_PAGE_SIZE", "40")]);
        assert_eq!(config.catalog.page_size, 40);
    }

    #[test]
    fn empty_exclusion_tag_disables_exclusion() {
        let config = config_from(&[("EXCLUDED_FORM_TAG", "")]);
        assert_eq!(config.catalog.excluded_form_tag, "");
    }
}
