//! Recent search terms plus the lifetime tally of distinct searches.
//!
//! History is advisory: it feeds the suggestion list under the search box and
//! never affects a search. The tally is kept apart from history because
//! history is capped while achievements count every distinct term ever
//! searched.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::state::storage::LocalStore;

#[derive(Debug, Clone)]
pub struct SearchHistoryStore {
    store: LocalStore,
    key: String,
    tally_key: String,
    limit: usize,
    terms: Vec<String>,
    /// Lowercased distinct terms ever searched.
    searched: Vec<String>,
}

impl SearchHistoryStore {
    /// Load history from `key` and the tally from `tally_key`.
    ///
    /// Stored values are normalised the way `add` would have written them:
    /// blank and repeated history terms are dropped (first occurrence wins),
    /// and tally entries are lowercased and de-duplicated.
    pub fn load(store: LocalStore, key: &str, tally_key: &str, limit: usize) -> Self {
        let stored: Vec<String> = store.load(key, Vec::new());
        let mut terms: Vec<String> = Vec::with_capacity(stored.len().min(limit));
        for term in stored {
            let term = term.trim();
            if !term.is_empty() && !terms.iter().any(|t| t == term) {
                terms.push(term.to_owned());
            }
        }
        terms.truncate(limit);

        let stored: Vec<String> = store.load(tally_key, Vec::new());
        let mut searched: Vec<String> = Vec::with_capacity(stored.len());
        for term in stored {
            let folded = term.trim().to_lowercase();
            if !folded.is_empty() && !searched.contains(&folded) {
                searched.push(folded);
            }
        }

        Self { store, key: key.to_owned(), tally_key: tally_key.to_owned(), limit, terms, searched }
    }

    /// Most recent first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of distinct terms ever searched, case-insensitive.
    pub fn distinct_search_count(&self) -> usize {
        self.searched.len()
    }

    /// Record `term` at the front. Returns whether anything was recorded.
    pub fn add(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }

        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_owned());
        self.terms.truncate(self.limit);
        self.store.save(&self.key, &self.terms);

        let folded = term.to_lowercase();
        if !self.searched.contains(&folded) {
            self.searched.push(folded);
            self.store.save(&self.tally_key, &self.searched);
        }
        true
    }

    /// Forget the visible history. The distinct-search tally is kept.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.store.remove(&self.key);
    }

    /// History entries containing `input`, case-insensitive, most recent first.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        self.terms
            .iter()
            .filter(|t| needle.is_empty() || t.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
