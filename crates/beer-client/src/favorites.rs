//! Favorites Store
//!
//! A set of beer ids kept as one JSON array under a single key. Storage
//! problems of any kind degrade to "no favorites"; nothing here returns an
//! error to the caller.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{Beer, StorageError};

pub const FAVORITES_KEY: &str = "beer-bank-favorites";

/// Synchronous string key-value persistence (browser `localStorage` or memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Favorite beer ids over an optional store
pub struct Favorites<S> {
    store: Option<S>,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// No persistence at all: reads are empty, writes do nothing
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    pub fn from_option(store: Option<S>) -> Self {
        Self { store }
    }

    /// Stored ids in insertion order
    pub fn list(&self) -> Vec<String> {
        let Some(store) = &self.store else {
            return Vec::new();
        };
        match read_ids(store) {
            Ok(ids) => ids,
            Err(e) => {
                log::error!("Error loading favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.list().iter().any(|fav| fav == id)
    }

    pub fn add(&self, id: &str) {
        let Some(store) = &self.store else { return };
        let mut ids = self.list();
        if ids.iter().any(|fav| fav == id) {
            return;
        }
        ids.push(id.to_string());
        if let Err(e) = write_ids(store, &ids) {
            log::error!("Error adding favorite: {}", e);
        }
    }

    pub fn remove(&self, id: &str) {
        let Some(store) = &self.store else { return };
        let ids: Vec<String> = self.list().into_iter().filter(|fav| fav != id).collect();
        if let Err(e) = write_ids(store, &ids) {
            log::error!("Error removing favorite: {}", e);
        }
    }

    /// Flip membership of `id`; returns whether it is now a favorite
    pub fn toggle(&self, id: &str) -> bool {
        let was_favorite = self.has(id);
        if was_favorite {
            self.remove(id);
        } else {
            self.add(id);
        }
        !was_favorite
    }

    /// The favorites among `beers`, in the order given
    pub fn favorite_beers(&self, beers: &[Beer]) -> Vec<Beer> {
        let ids = self.list();
        beers
            .iter()
            .filter(|beer| ids.contains(&beer.id))
            .cloned()
            .collect()
    }
}

fn read_ids<S: KeyValueStore>(store: &S) -> Result<Vec<String>, StorageError> {
    match store.get(FAVORITES_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

fn write_ids<S: KeyValueStore>(store: &S, ids: &[String]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(ids)?;
    store.set(FAVORITES_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose backend always fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    fn beer(id: &str) -> Beer {
        Beer {
            id: id.to_string(),
            name: id.to_string(),
            style: None,
            description: None,
            abv: None,
            ibu: None,
            ebc: None,
            tagline: None,
            image_url: None,
            brewer: None,
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let favorites = Favorites::new(MemoryStore::new());
        assert!(favorites.list().is_empty());

        assert!(favorites.toggle("5"));
        assert_eq!(favorites.list(), vec!["5".to_string()]);

        assert!(!favorites.toggle("5"));
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add("1");
        favorites.add("2");
        favorites.add("1");
        assert_eq!(favorites.list(), vec!["1".to_string(), "2".to_string()]);
        assert!(favorites.has("2"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add("1");
        favorites.remove("9");
        assert_eq!(favorites.list(), vec!["1".to_string()]);
    }

    #[test]
    fn test_persisted_as_json_array() {
        let store = MemoryStore::new();
        let favorites = Favorites::new(store);
        favorites.add("a");
        favorites.add("b");
        let raw = favorites.store.as_ref().unwrap().get(FAVORITES_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_corrupt_entry_reads_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not json").unwrap();
        let favorites = Favorites::new(store);
        assert!(favorites.list().is_empty());
        assert!(!favorites.has("1"));

        favorites.add("1");
        assert_eq!(favorites.list(), vec!["1".to_string()]);
    }

    #[test]
    fn test_unavailable_store_is_safe() {
        let favorites: Favorites<MemoryStore> = Favorites::unavailable();
        favorites.add("1");
        favorites.remove("1");
        assert!(favorites.list().is_empty());
        assert!(!favorites.has("1"));
        assert!(favorites.toggle("1"));
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_broken_backend_never_faults() {
        let favorites = Favorites::new(BrokenStore);
        favorites.add("1");
        favorites.remove("1");
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_favorite_beers_keeps_input_order() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add("3");
        favorites.add("1");
        let beers = vec![beer("1"), beer("2"), beer("3")];
        let picked: Vec<String> = favorites.favorite_beers(&beers).into_iter().map(|b| b.id).collect();
        assert_eq!(picked, vec!["1".to_string(), "3".to_string()]);
    }
}
