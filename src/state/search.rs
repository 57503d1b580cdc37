#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::search::{SearchError, SearchOutcome};
use crate::net::types::Recipe;

/// What the result area should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Found(usize),
    Empty,
    Failed(String),
}

/// Result list and loading flag for the search page.
///
/// Only one search is expected in flight; `begin` refuses a second one while
/// the first is loading instead of the client enforcing exclusion.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub term: String,
    pub recipes: Vec<Recipe>,
    pub status: SearchStatus,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Mark a search for `term` as started. Returns `false` if one is already
    /// running or the term is blank.
    pub fn begin(&mut self, term: &str) -> bool {
        let term = term.trim();
        if self.is_loading() || term.is_empty() {
            return false;
        }
        term.clone_into(&mut self.term);
        self.status = SearchStatus::Loading;
        true
    }

    /// Apply the result of the search started by `begin`.
    pub fn finish(&mut self, result: Result<SearchOutcome, SearchError>) {
        match result {
            Ok(SearchOutcome::Skipped) => {
                self.recipes.clear();
                self.status = SearchStatus::Idle;
            }
            Ok(outcome) => {
                self.recipes = outcome.into_recipes();
                self.status = if self.recipes.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Found(self.recipes.len())
                };
            }
            Err(e) => {
                self.recipes.clear();
                self.status = SearchStatus::Failed(e.to_string());
            }
        }
    }
}
