//! Recipe search against the TheMealDB name-search endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side and native tests: the transport is a trait, so tests plug in
//! a fake and the stub transport reports itself unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and payloads that do not match the
//! expected shape all become [`SearchError`]. A `null` meal list and an empty
//! one are successes with no recipes, never errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::AppConfig;
use crate::net::types::{Recipe, SearchResponse};
use crate::state::notice::{Notice, Notifier};

/// Query parameter carrying the free-text term.
pub const SEARCH_PARAM: &str = "s";

/// Errors produced by a recipe search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("network error: status {status}")]
    Status { status: u16 },

    /// The body was not JSON or did not match the expected shape.
    #[error("malformed search response: {0}")]
    Malformed(String),
}

impl SearchError {
    /// Whether this is a transport/status failure rather than a bad payload.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

/// Successful result of [`SearchClient::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was blank; no request was made.
    Skipped,
    /// The API answered `meals: null`.
    NoMeals,
    /// The API answered with a list, possibly empty.
    Meals(Vec<Recipe>),
}

impl SearchOutcome {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Self::Meals(recipes) => recipes,
            Self::Skipped | Self::NoMeals => &[],
        }
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::Meals(recipes) => recipes,
            Self::Skipped | Self::NoMeals => Vec::new(),
        }
    }

    /// Notice the view layer should show for this outcome, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Skipped => None,
            Self::NoMeals => Some(Notice::SearchEmpty),
            Self::Meals(recipes) if recipes.is_empty() => Some(Notice::SearchEmpty),
            Self::Meals(recipes) => Some(Notice::SearchCompleted { count: recipes.len() }),
        }
    }
}

/// Raw HTTP response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests. Query values are URL-escaped by the implementation.
#[async_trait::async_trait(?Send)]
pub trait RecipeTransport {
    /// Send `GET url?query`.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if no response was received.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, String>;
}

/// `fetch`-backed transport for the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetch;

#[async_trait::async_trait(?Send)]
impl RecipeTransport for BrowserFetch {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .query(query.iter().copied())
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, query);
            Err("not available on server".to_owned())
        }
    }
}

/// Searches recipes by name and reports the outcome as a notice.
#[derive(Debug, Clone)]
pub struct SearchClient<T> {
    transport: T,
    endpoint: String,
    notifier: Notifier,
}

impl<T: RecipeTransport> SearchClient<T> {
    pub fn new(transport: T, config: &AppConfig, notifier: Notifier) -> Self {
        Self { transport, endpoint: config.search_endpoint(), notifier }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search recipes whose name matches `term`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] on transport failure, non-success status, or
    /// a response that does not match the expected shape.
    pub async fn search(&self, term: &str) -> Result<SearchOutcome, SearchError> {
        let result = self.fetch(term).await;
        match &result {
            Ok(outcome) => {
                if let Some(notice) = outcome.notice() {
                    self.notifier.notify(notice);
                }
            }
            Err(e) => {
                leptos::logging::warn!("search for {term:?} failed: {e}");
                self.notifier.notify(Notice::SearchError { message: e.to_string() });
            }
        }
        result
    }

    async fn fetch(&self, term: &str) -> Result<SearchOutcome, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(SearchOutcome::Skipped);
        }

        let reply = self
            .transport
            .get(&self.endpoint, &[(SEARCH_PARAM, term)])
            .await
            .map_err(SearchError::Transport)?;
        if !reply.is_success() {
            return Err(SearchError::Status { status: reply.status });
        }
        parse_search_body(&reply.body)
    }
}

/// Validate and decode a search response body.
///
/// # Errors
///
/// Returns [`SearchError::Malformed`] if the body is not a JSON object with a
/// `meals` list of recipe-shaped objects (or `null`). One bad entry fails the
/// whole body.
pub fn parse_search_body(body: &str) -> Result<SearchOutcome, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(SearchError::Malformed("expected a JSON object".to_owned()));
    }
    let response: SearchResponse =
        serde_json::from_value(value).map_err(|e| SearchError::Malformed(e.to_string()))?;
    Ok(match response.meals {
        None => SearchOutcome::NoMeals,
        Some(recipes) => SearchOutcome::Meals(recipes),
    })
}
