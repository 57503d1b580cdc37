//! Bookmarked recipes, unique by id, in insertion order.
//!
//! Every mutation rewrites the whole collection to storage.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::net::types::Recipe;
use crate::state::notice::{Notice, Notifier};
use crate::state::storage::LocalStore;

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    store: LocalStore,
    key: String,
    notifier: Notifier,
    items: Vec<Recipe>,
}

impl FavoritesStore {
    /// Load the collection stored under `key`, starting empty if missing or corrupt.
    pub fn load(store: LocalStore, key: &str, notifier: Notifier) -> Self {
        let stored: Vec<Recipe> = store.load(key, Vec::new());
        let mut items: Vec<Recipe> = Vec::with_capacity(stored.len());
        for recipe in stored {
            if !items.iter().any(|r| r.id == recipe.id) {
                items.push(recipe);
            }
        }
        Self { store, key: key.to_owned(), notifier, items }
    }

    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append `recipe` unless already present. Returns whether it was added.
    pub fn add(&mut self, recipe: &Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            return false;
        }
        self.items.push(recipe.clone());
        self.persist();
        self.notifier.notify(Notice::FavoriteAdded { name: recipe.name.clone() });
        true
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|r| r.id == id) else {
            return false;
        };
        let removed = self.items.remove(index);
        self.persist();
        self.notifier.notify(Notice::FavoriteRemoved { name: removed.name });
        true
    }

    /// Flip favorite state for `recipe`. Returns the new state.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            self.remove(&recipe.id);
            false
        } else {
            self.add(recipe);
            true
        }
    }

    fn persist(&self) {
        self.store.save(&self.key, &self.items);
    }
}
