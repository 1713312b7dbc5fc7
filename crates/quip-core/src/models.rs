//! Data models for quip
//!
//! Defines the `Quote`, the atomic unit of data. A quote has no generated
//! identifier: two quotes are the same quote when their content and author
//! match. The topic is advisory metadata and never part of identity.

use serde::{Deserialize, Serialize};

/// A quote: a content/author pair with an optional topic label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text
    pub content: String,
    /// Who said it
    pub author: String,
    /// Free-text category label, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Quote {
    /// Create a quote without a topic (remote quotes carry none)
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            topic: None,
        }
    }

    /// Create a quote tagged with a topic
    pub fn with_topic(
        content: impl Into<String>,
        author: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            topic: Some(topic.into()),
        }
    }
}

// Identity is (content, author). A fetched quote with no topic equals its
// dataset twin that carries one.
impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.author == other.author
    }
}

impl Eq for Quote {}

impl std::hash::Hash for Quote {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.content.hash(state);
        self.author.hash(state);
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.content, self.author)
    }
}
