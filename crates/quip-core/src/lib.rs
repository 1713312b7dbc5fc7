//! quip Core Library
//!
//! This crate provides the core functionality for quip, a local-first
//! quote collection manager: topic lookup over a built-in dataset,
//! persisted favorites, bounded recent history, and a theme preference.
//!
//! # Architecture
//!
//! All state lives in an explicit [`Session`] wired to an injected
//! [`storage::KeyValueStore`]; the dataset fits in memory and is re-scanned
//! per query.
//!
//! # Quick Start
//!
//! ```text
//! let mut session = Session::open()?;
//!
//! // Random quote for a topic
//! let quote = session.quote_by_topic("wisdom")?;
//!
//! // Favorite it
//! session.toggle_favorite(&quote)?;
//! ```
//!
//! # Modules
//!
//! - `session`: Unified state object (main entry point)
//! - `models`: The `Quote` data structure
//! - `store`: Topic-filtered and random queries
//! - `favorites`: Persisted favorites set
//! - `recent`: Bounded recent-quote history
//! - `theme`: Theme preference with allow-list validation
//! - `storage`: Key-value persistence
//! - `share`: Share text and deep links
//! - `config`: Application configuration

pub mod config;
pub mod dataset;
pub mod error;
pub mod favorites;
pub mod models;
pub mod recent;
pub mod session;
pub mod share;
pub mod storage;
pub mod store;
pub mod theme;

pub use config::Config;
pub use error::{QuipError, QuipResult};
pub use favorites::{FavoriteEntry, FavoritesManager};
pub use models::Quote;
pub use recent::RecentHistory;
pub use session::{FetchGuard, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::QuoteStore;
pub use theme::{Theme, ThemePreference};
