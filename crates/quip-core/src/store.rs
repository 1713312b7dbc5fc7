//! Quote store
//!
//! Holds the quote list and answers topic-filtered and random queries.
//! The whole dataset fits in memory and is re-scanned per query.

use rand::seq::SliceRandom;

use crate::dataset::builtin_quotes;
use crate::error::{QuipError, QuipResult};
use crate::models::Quote;

/// In-memory quote collection
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuoteStore {
    /// Store over the built-in dataset
    pub fn builtin() -> Self {
        Self {
            quotes: builtin_quotes(),
        }
    }

    /// Store over a caller-supplied quote list
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// All quotes, in source order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// All quotes whose topic equals the input, case-insensitively and
    /// ignoring surrounding whitespace. Empty or unmatched input returns
    /// an empty Vec, never an error.
    pub fn query(&self, topic: &str) -> Vec<Quote> {
        let needle = topic.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.quotes
            .iter()
            .filter(|q| {
                q.topic
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(&needle))
            })
            .cloned()
            .collect()
    }

    /// Pick one quote uniformly at random
    ///
    /// An empty candidate list is the "no quotes found" condition; callers
    /// surface it to the user rather than crashing.
    pub fn pick_random(candidates: &[Quote]) -> QuipResult<Quote> {
        candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(QuipError::EmptyCandidates)
    }

    /// Distinct topics in dataset order
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if let Some(topic) = &quote.topic {
                if !topics.iter().any(|t| t == topic) {
                    topics.push(topic.clone());
                }
            }
        }
        topics
    }
}
