use super::*;

#[test]
fn defaults_point_at_public_api() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.history_limit, 10);
    assert_eq!(config.search_endpoint(), "https://www.themealdb.com/api/json/v1/1/search.php");
}

#[test]
fn default_storage_keys() {
    let keys = StorageKeys::default();
    assert_eq!(keys.favorites, "recipe-favorites");
    assert_eq!(keys.history, "recipe-search-history");
    assert_eq!(keys.achievements, "recipe-achievements");
    assert_eq!(keys.search_tally, "recipe-search-tally");
}

#[test]
fn from_values_without_overrides_matches_default() {
    assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
}

#[test]
fn base_url_override_strips_trailing_slash() {
    let config = AppConfig::from_values(Some("http://localhost:8080/api/"), None);
    assert_eq!(config.api_base_url, "http://localhost:8080/api");
    assert_eq!(config.search_endpoint(), "http://localhost:8080/api/search.php");
}

#[test]
fn blank_base_url_falls_back() {
    let config = AppConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn history_limit_override() {
    assert_eq!(AppConfig::from_values(None, Some(" 25 ")).history_limit, 25);
}

#[test]
fn invalid_history_limit_falls_back() {
    assert_eq!(AppConfig::from_values(None, Some("lots")).history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(AppConfig::from_values(None, Some("0")).history_limit, DEFAULT_HISTORY_LIMIT);
}
