//! Session state
//!
//! The `Session` is the single explicit state object: it owns the quote
//! store, favorites, recent history, and theme preference, all wired to
//! one injected key-value store. It is constructed once at startup and
//! passed by reference to consumers; nothing reads ambient global state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::error::{QuipError, QuipResult};
use crate::favorites::FavoritesManager;
use crate::models::Quote;
use crate::recent::RecentHistory;
use crate::storage::{FileStore, KeyValueStore, StorageResult, LAST_TOPIC_KEY};
use crate::store::QuoteStore;
use crate::theme::{Theme, ThemePreference};

/// Request-generation guard for remote fetches
///
/// Each fetch takes a generation from `begin`; a result is applied only if
/// its generation is still the latest. A slow response from an earlier
/// request can therefore never overwrite a newer one.
#[derive(Default)]
pub struct FetchGuard {
    latest: AtomicU64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier generations
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the given generation is still the latest
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}

/// Unified application state
pub struct Session {
    quotes: QuoteStore,
    favorites: FavoritesManager,
    recent: RecentHistory,
    theme: ThemePreference,
    fetch_guard: FetchGuard,
    last_topic: Option<String>,
    store: Arc<dyn KeyValueStore>,
    config: Config,
}

impl Session {
    /// Open a session with configuration from the default location
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open a session with a specific configuration, persisting to the
    /// configured data directory
    pub fn open_with_config(config: Config) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.data_dir));
        Self::with_store(config, store).context("Failed to load persisted state")
    }

    /// Open a session over an injected store (tests, ephemeral runs)
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> StorageResult<Self> {
        let favorites = FavoritesManager::load(store.clone())?;
        let theme = ThemePreference::load(store.clone())?;
        let last_topic = store.get(LAST_TOPIC_KEY)?;

        Ok(Self {
            quotes: QuoteStore::builtin(),
            favorites,
            recent: RecentHistory::new(config.max_recent),
            theme,
            fetch_guard: FetchGuard::new(),
            last_topic,
            store,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }

    // ==================== Topic Lookup ====================

    /// Random quote for a topic
    ///
    /// Filters the dataset, picks uniformly among the matches, records the
    /// result into recent history, and remembers the topic for next time.
    /// No matches is the `NoQuotesFound` state.
    pub fn quote_by_topic(&mut self, topic: &str) -> QuipResult<Quote> {
        let normalized = topic.trim().to_lowercase();
        let candidates = self.quotes.query(&normalized);

        if candidates.is_empty() {
            return Err(QuipError::NoQuotesFound { topic: normalized });
        }

        let quote = QuoteStore::pick_random(&candidates)?;
        self.recent.record(&quote);
        self.remember_topic(&normalized)?;
        Ok(quote)
    }

    /// All matches for a topic, in source order
    pub fn quotes_for_topic(&self, topic: &str) -> Vec<Quote> {
        self.quotes.query(topic)
    }

    /// The most recently queried topic, if any
    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }

    fn remember_topic(&mut self, topic: &str) -> StorageResult<()> {
        self.store.set(LAST_TOPIC_KEY, topic)?;
        self.last_topic = Some(topic.to_string());
        Ok(())
    }

    // ==================== Remote Fetch ====================

    /// Start a remote fetch, returning its generation token
    pub fn begin_fetch(&self) -> u64 {
        self.fetch_guard.begin()
    }

    /// Apply a fetched quote if its generation is still current
    ///
    /// Returns true when applied. A stale result is dropped without
    /// touching any state, so the displayed quote is never overwritten by
    /// an out-of-date response.
    pub fn apply_fetched(&mut self, generation: u64, quote: &Quote) -> bool {
        if !self.fetch_guard.is_current(generation) {
            debug!(generation, "Dropping stale fetch result");
            return false;
        }
        self.recent.record(quote);
        true
    }

    // ==================== Favorites ====================

    pub fn toggle_favorite(&mut self, quote: &Quote) -> StorageResult<bool> {
        self.favorites.toggle(quote)
    }

    pub fn remove_favorite(&mut self, quote: &Quote) -> StorageResult<()> {
        self.favorites.remove(quote)
    }

    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.favorites.contains(quote)
    }

    pub fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    // ==================== Recent History ====================

    pub fn recent(&self) -> &RecentHistory {
        &self.recent
    }

    /// Record a quote resolved outside the topic/fetch paths (e.g. one
    /// decoded from a share link)
    pub fn record_seen(&mut self, quote: &Quote) {
        self.recent.record(quote);
    }

    // ==================== Theme ====================

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&mut self, name: &str) -> StorageResult<Theme> {
        self.theme.set(name)
    }
}
