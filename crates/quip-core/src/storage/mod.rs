//! Key-value persistence
//!
//! Small amounts of state (favorites, theme, last topic) are persisted
//! through an injected `KeyValueStore` rather than ambient global state.
//! Each key maps to one serialized document; writes are atomic at the key
//! level, which is the only transactional guarantee the callers rely on.

mod error;
mod file;
mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the favorites collection is persisted
pub const FAVORITES_KEY: &str = "favorites";

/// Key under which the theme preference is persisted
pub const THEME_KEY: &str = "theme";

/// Key under which the last-selected topic is persisted
pub const LAST_TOPIC_KEY: &str = "last_topic";

/// Durable key-value storage
///
/// Implementations must make `set` atomic per key: a reader never observes
/// a partially-written value.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key has never been written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}
