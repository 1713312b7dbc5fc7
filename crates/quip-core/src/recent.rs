//! Recent quote history
//!
//! Bounded, deduplicated, most-recent-first list of quotes seen this
//! session. Not persisted: history lives and dies with the process.

use crate::models::Quote;

/// Default cap on the history length
pub const DEFAULT_RECENT_CAP: usize = 5;

/// Bounded most-recent-first quote list
pub struct RecentHistory {
    entries: Vec<Quote>,
    cap: usize,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAP)
    }
}

impl RecentHistory {
    /// History capped at `cap` entries (a cap of 0 keeps nothing)
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Record a seen quote
    ///
    /// If an equal quote is already anywhere in the list this is a no-op;
    /// it is not moved to the front. Otherwise the quote is prepended and
    /// the list truncated to the cap.
    pub fn record(&mut self, quote: &Quote) {
        if self.entries.contains(quote) {
            return;
        }
        self.entries.insert(0, quote.clone());
        self.entries.truncate(self.cap);
    }

    /// Entries, newest first
    pub fn list(&self) -> &[Quote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}
