use super::*;
use crate::state::notice::NoticeLog;
use crate::state::storage::MemoryStorage;

const KEY: &str = "recipe-favorites";

fn recipe(id: &str, name: &str) -> Recipe {
    Recipe::new(id, name)
}

fn fresh() -> (FavoritesStore, MemoryStorage, NoticeLog) {
    let memory = MemoryStorage::new();
    let log = NoticeLog::new();
    let store = FavoritesStore::load(LocalStore::new(memory.clone()), KEY, log.notifier());
    (store, memory, log)
}

fn reload(memory: &MemoryStorage) -> FavoritesStore {
    FavoritesStore::load(LocalStore::new(memory.clone()), KEY, Notifier::silent())
}

// =============================================================
// add / remove / is_favorite
// =============================================================

#[test]
fn add_then_remove_round_trip() {
    let (mut favorites, _, _) = fresh();
    let stew = recipe("1", "Chicken Stew");

    assert!(favorites.add(&stew));
    assert!(favorites.is_favorite("1"));
    assert!(favorites.remove("1"));
    assert!(!favorites.is_favorite("1"));
    assert!(favorites.is_empty());
}

#[test]
fn add_is_idempotent_and_notifies_once() {
    let (mut favorites, _, log) = fresh();
    let stew = recipe("1", "Chicken Stew");

    assert!(favorites.add(&stew));
    assert!(!favorites.add(&stew));

    assert_eq!(favorites.len(), 1);
    assert_eq!(log.take(), vec![Notice::FavoriteAdded { name: "Chicken Stew".to_owned() }]);
}

#[test]
fn add_with_same_id_different_payload_is_ignored() {
    let (mut favorites, _, _) = fresh();
    favorites.add(&recipe("1", "Chicken Stew"));
    favorites.add(&recipe("1", "Renamed Stew"));
    assert_eq!(favorites.get("1").map(|r| r.name.as_str()), Some("Chicken Stew"));
}

#[test]
fn add_preserves_insertion_order() {
    let (mut favorites, _, _) = fresh();
    for (id, name) in [("3", "C"), ("1", "A"), ("2", "B")] {
        favorites.add(&recipe(id, name));
    }
    let ids: Vec<&str> = favorites.items().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn remove_absent_is_silent_noop() {
    let (mut favorites, memory, log) = fresh();
    assert!(!favorites.remove("missing"));
    assert!(log.is_empty());
    assert!(memory.raw(KEY).is_none());
}

#[test]
fn remove_notifies_with_recipe_name() {
    let (mut favorites, _, log) = fresh();
    favorites.add(&recipe("7", "Tarta de Santiago"));
    log.take();

    favorites.remove("7");
    assert_eq!(log.take(), vec![Notice::FavoriteRemoved { name: "Tarta de Santiago".to_owned() }]);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_state() {
    let (mut favorites, _, log) = fresh();
    let paella = recipe("5", "Paella");

    assert!(favorites.toggle(&paella));
    assert!(favorites.is_favorite("5"));
    assert!(!favorites.toggle(&paella));
    assert!(!favorites.is_favorite("5"));

    let notices = log.take();
    assert!(matches!(notices[0], Notice::FavoriteAdded { .. }));
    assert!(matches!(notices[1], Notice::FavoriteRemoved { .. }));
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn every_mutation_is_persisted() {
    let (mut favorites, memory, _) = fresh();
    favorites.add(&recipe("1", "A"));
    favorites.add(&recipe("2", "B"));
    assert_eq!(reload(&memory).len(), 2);

    favorites.remove("1");
    let reloaded = reload(&memory);
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.is_favorite("2"));
}

#[test]
fn persisted_records_use_wire_field_names() {
    let (mut favorites, memory, _) = fresh();
    favorites.add(&recipe("1", "A"));
    let raw = memory.raw(KEY).unwrap();
    assert!(raw.contains("\"idMeal\":\"1\""));
    assert!(raw.contains("\"strMeal\":\"A\""));
}

#[test]
fn corrupt_storage_loads_empty() {
    let memory = MemoryStorage::new();
    memory.seed(KEY, "[{\"idMeal\": ");
    let favorites = reload(&memory);
    assert!(favorites.is_empty());
}

#[test]
fn duplicate_ids_in_storage_collapse_on_load() {
    let memory = MemoryStorage::new();
    let store = LocalStore::new(memory.clone());
    store.save(KEY, &vec![recipe("1", "First"), recipe("1", "Second"), recipe("2", "Other")]);

    let favorites = reload(&memory);
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites.get("1").map(|r| r.name.as_str()), Some("First"));
}

#[test]
fn read_only_storage_keeps_in_memory_state() {
    let memory = MemoryStorage::new();
    let mut favorites = FavoritesStore::load(LocalStore::new(memory.read_only()), KEY, Notifier::silent());
    assert!(favorites.add(&recipe("1", "A")));
    assert!(favorites.is_favorite("1"));
    assert!(memory.raw(KEY).is_none());
}
