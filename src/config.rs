//! Application configuration.
//!
//! WASM bundles have no process environment, so overrides are read from the
//! build environment with `option_env!` and baked into the binary.
//!
//! Optional build-time variables:
//! - `RECETAPPS_API_BASE_URL`: recipe API base, default TheMealDB v1 public key
//! - `RECETAPPS_HISTORY_LIMIT`: number of history entries kept, default 10

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub const FAVORITES_KEY: &str = "recipe-favorites";
pub const SEARCH_HISTORY_KEY: &str = "recipe-search-history";
pub const SEARCH_TALLY_KEY: &str = "recipe-search-tally";
pub const ACHIEVEMENTS_KEY: &str = "recipe-achievements";

/// Storage key for each persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub favorites: String,
    pub history: String,
    pub search_tally: String,
    pub achievements: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites: FAVORITES_KEY.to_owned(),
            history: SEARCH_HISTORY_KEY.to_owned(),
            search_tally: SEARCH_TALLY_KEY.to_owned(),
            achievements: ACHIEVEMENTS_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub history_limit: usize,
    pub keys: StorageKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            keys: StorageKeys::default(),
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("RECETAPPS_API_BASE_URL"), option_env!("RECETAPPS_HISTORY_LIMIT"))
    }

    /// Build config from raw override values; invalid or blank values fall back to defaults.
    pub fn from_values(api_base_url: Option<&str>, history_limit: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let history_limit = parse_limit(history_limit).unwrap_or(DEFAULT_HISTORY_LIMIT);
        Self { api_base_url, history_limit, keys: StorageKeys::default() }
    }

    /// Full URL of the name-search endpoint.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search.php", self.api_base_url)
    }
}

fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
