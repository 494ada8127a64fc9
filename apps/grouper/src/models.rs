use serde::{Deserialize, Serialize};

/// A single news item being classified.
///
/// `title` is the join key used to match the model's answer back to the post,
/// so it must be unique within a batch for matching to be deterministic. If
/// duplicates exist, only the first unmatched post with that title is
/// annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub pubdate: String,
    /// Broad topical tags, possibly several per post. Filled by grouping.
    #[serde(default)]
    pub categories: Vec<String>,
    /// The concrete real-world occurrence this post reports, if any.
    #[serde(default)]
    pub event: Option<String>,
    /// Named people mentioned in the post. Filled by grouping.
    #[serde(default)]
    pub persons: Vec<String>,
}

impl Post {
    pub fn new(title: impl Into<String>, pubdate: impl Into<String>) -> Self {
        Post {
            title: title.into(),
            pubdate: pubdate.into(),
            categories: Vec::new(),
            event: None,
            persons: Vec::new(),
        }
    }
}

/// Already-known taxonomy lists embedded into the system prompt so the model
/// reuses existing names instead of inventing near-duplicates. Read-only.
#[derive(Debug, Clone, Default)]
pub struct KnownTaxonomy {
    pub events: Vec<String>,
    pub categories: Vec<String>,
    pub persons: Vec<String>,
}
