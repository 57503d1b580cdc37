//! Composition root for the persisted client state.
//!
//! DESIGN
//! ======
//! One `RecipeBook` is created when the app mounts and lives for the whole
//! session; components reach it through context. It owns one instance of
//! each store and sequences every mutation with achievement re-evaluation,
//! so components never call the engine directly.

#[cfg(test)]
#[path = "recipe_book_test.rs"]
mod recipe_book_test;

use crate::config::AppConfig;
use crate::net::types::Recipe;
use crate::state::achievements::{AchievementEngine, AchievementInputs};
use crate::state::favorites::FavoritesStore;
use crate::state::history::SearchHistoryStore;
use crate::state::notice::Notifier;
use crate::state::storage::{LocalStore, MemoryStorage};
use crate::util::clock::Clock;

#[derive(Debug, Clone)]
pub struct RecipeBook {
    favorites: FavoritesStore,
    history: SearchHistoryStore,
    achievements: AchievementEngine,
}

impl RecipeBook {
    /// Load every store and run the initial achievement pass.
    pub fn open(config: &AppConfig, store: LocalStore, notifier: Notifier, clock: Clock) -> Self {
        let keys = &config.keys;
        let favorites = FavoritesStore::load(store.clone(), &keys.favorites, notifier.clone());
        let history =
            SearchHistoryStore::load(store.clone(), &keys.history, &keys.search_tally, config.history_limit);
        let achievements = AchievementEngine::load(store, &keys.achievements, notifier, clock);
        Self::from_parts(favorites, history, achievements)
    }

    /// Empty book backed by throwaway memory storage and a silent notifier.
    pub fn in_memory(config: &AppConfig, clock: Clock) -> Self {
        Self::open(config, LocalStore::new(MemoryStorage::new()), Notifier::silent(), clock)
    }

    /// Assemble from already-loaded stores and run the initial achievement pass.
    pub fn from_parts(
        favorites: FavoritesStore,
        history: SearchHistoryStore,
        achievements: AchievementEngine,
    ) -> Self {
        let mut book = Self { favorites, history, achievements };
        book.reevaluate();
        book
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn history(&self) -> &SearchHistoryStore {
        &self.history
    }

    pub fn achievements(&self) -> &AchievementEngine {
        &self.achievements
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Flip favorite state. Returns the new state.
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> bool {
        let now_favorite = self.favorites.toggle(recipe);
        self.reevaluate();
        now_favorite
    }

    pub fn add_favorite(&mut self, recipe: &Recipe) -> bool {
        let added = self.favorites.add(recipe);
        if added {
            self.reevaluate();
        }
        added
    }

    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let removed = self.favorites.remove(id);
        if removed {
            self.reevaluate();
        }
        removed
    }

    /// Record a submitted search term in history and the distinct tally.
    pub fn record_search(&mut self, term: &str) -> bool {
        let recorded = self.history.add(term);
        if recorded {
            self.reevaluate();
        }
        recorded
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn inputs(&self) -> AchievementInputs {
        AchievementInputs { favorites: self.favorites.len(), searches: self.history.distinct_search_count() }
    }

    /// Percent towards achievement `id`; 100 once unlocked.
    pub fn progress(&self, id: &str) -> f64 {
        if self.achievements.is_unlocked(id) {
            return 100.0;
        }
        self.achievements.progress(id, self.inputs())
    }

    fn reevaluate(&mut self) {
        let inputs = self.inputs();
        self.achievements.evaluate(inputs);
    }
}
