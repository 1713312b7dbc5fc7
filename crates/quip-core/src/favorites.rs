//! Favorites management
//!
//! User-curated set of quotes, newest first, no duplicates under quote
//! equality. Every mutation serializes the entire set through the injected
//! key-value store.
//!
//! The persisted payload is a versioned envelope. Anything that fails
//! validation on load (wrong shape, unknown version) is logged and treated
//! as absent rather than trusted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Quote;
use crate::storage::{KeyValueStore, StorageResult, FAVORITES_KEY};

/// Current persisted schema version
const SCHEMA_VERSION: u32 = 1;

/// One favorited quote with the time it was saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub quote: Quote,
    pub added_at: DateTime<Utc>,
}

/// Persisted envelope for the favorites collection
#[derive(Debug, Serialize, Deserialize)]
struct StoredFavorites {
    version: u32,
    entries: Vec<FavoriteEntry>,
}

/// Ordered, persisted favorites set
pub struct FavoritesManager {
    entries: Vec<FavoriteEntry>,
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesManager {
    /// Load favorites from storage, defaulting to empty if the key is
    /// absent or the payload does not validate
    pub fn load(store: Arc<dyn KeyValueStore>) -> StorageResult<Self> {
        let entries = match store.get(FAVORITES_KEY)? {
            Some(raw) => parse_stored(&raw),
            None => Vec::new(),
        };

        Ok(Self { entries, store })
    }

    /// Toggle a quote: remove it if present, otherwise insert at the front
    ///
    /// Returns true if the quote is favorited after the call.
    pub fn toggle(&mut self, quote: &Quote) -> StorageResult<bool> {
        let favorited = if self.contains(quote) {
            self.entries.retain(|e| e.quote != *quote);
            false
        } else {
            self.entries.insert(
                0,
                FavoriteEntry {
                    quote: quote.clone(),
                    added_at: Utc::now(),
                },
            );
            true
        };

        self.persist()?;
        Ok(favorited)
    }

    /// Remove all entries equal to the given quote (at most one exists)
    pub fn remove(&mut self, quote: &Quote) -> StorageResult<()> {
        self.entries.retain(|e| e.quote != *quote);
        self.persist()
    }

    /// Whether an equal quote is favorited
    pub fn contains(&self, quote: &Quote) -> bool {
        self.entries.iter().any(|e| e.quote == *quote)
    }

    /// Current favorites, newest first
    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the full set and write it through the store
    fn persist(&self) -> StorageResult<()> {
        let stored = StoredFavorites {
            version: SCHEMA_VERSION,
            entries: self.entries.clone(),
        };
        let payload = serde_json::to_string(&stored)?;
        self.store.set(FAVORITES_KEY, &payload)
    }
}

/// Validate a persisted payload, falling back to empty on any mismatch
fn parse_stored(raw: &str) -> Vec<FavoriteEntry> {
    match serde_json::from_str::<StoredFavorites>(raw) {
        Ok(stored) if stored.version == SCHEMA_VERSION => stored.entries,
        Ok(stored) => {
            warn!(
                version = stored.version,
                "Unknown favorites schema version, starting empty"
            );
            Vec::new()
        }
        Err(e) => {
            warn!("Malformed favorites payload, starting empty: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn manager() -> FavoritesManager {
        FavoritesManager::load(Arc::new(MemoryStore::new())).unwrap()
    }

    fn lennon() -> Quote {
        Quote::new(
            "Life is what happens when you are busy making other plans.",
            "John Lennon",
        )
    }

    #[test]
    fn test_starts_empty() {
        let favorites = manager();
        assert!(favorites.is_empty());
        assert_eq!(favorites.len(), 0);
    }

    #[test]
    fn test_toggle_twice_returns_to_empty() {
        let mut favorites = manager();
        let quote = lennon();

        assert!(favorites.toggle(&quote).unwrap());
        assert!(favorites.contains(&quote));

        assert!(!favorites.toggle(&quote).unwrap());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut favorites = manager();
        favorites.toggle(&lennon()).unwrap();
        favorites
            .toggle(&Quote::new("Creativity takes courage.", "Henri Matisse"))
            .unwrap();

        let listed = favorites.list();
        assert_eq!(listed[0].quote.author, "Henri Matisse");
        assert_eq!(listed[1].quote.author, "John Lennon");
    }

    #[test]
    fn test_remove() {
        let mut favorites = manager();
        let quote = lennon();

        favorites.toggle(&quote).unwrap();
        favorites.remove(&quote).unwrap();
        assert!(!favorites.contains(&quote));

        // Removing an absent quote is a no-op
        favorites.remove(&quote).unwrap();
    }

    #[test]
    fn test_every_mutation_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesManager::load(store.clone()).unwrap();

        favorites.toggle(&lennon()).unwrap();
        assert!(store.get(FAVORITES_KEY).unwrap().is_some());

        // A fresh manager over the same store sees the quote
        let reloaded = FavoritesManager::load(store).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains(&lennon()));
    }

    #[test]
    fn test_equality_by_content_and_author() {
        let mut favorites = manager();
        let tagged = Quote::with_topic(
            "Life is what happens when you are busy making other plans.",
            "John Lennon",
            "life",
        );

        favorites.toggle(&tagged).unwrap();
        // The untagged twin toggles the same entry off
        assert!(!favorites.toggle(&lennon()).unwrap());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_malformed_payload_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(FAVORITES_KEY, "not json at all").unwrap();

        let favorites = FavoritesManager::load(store).unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_unknown_version_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(FAVORITES_KEY, r#"{"version":99,"entries":[]}"#)
            .unwrap();

        let favorites = FavoritesManager::load(store).unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_wrong_shape_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(FAVORITES_KEY, r#"["just","strings"]"#).unwrap();

        let favorites = FavoritesManager::load(store).unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_persisted_round_trip_keeps_order() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesManager::load(store.clone()).unwrap();

        favorites.toggle(&lennon()).unwrap();
        favorites
            .toggle(&Quote::new("Turn your wounds into wisdom.", "Oprah Winfrey"))
            .unwrap();

        let reloaded = FavoritesManager::load(store).unwrap();
        assert_eq!(reloaded.list()[0].quote.author, "Oprah Winfrey");
        assert_eq!(reloaded.list()[1].quote.author, "John Lennon");
    }
}
