use serde::{Deserialize, Serialize};

/// One page summary from the pre-built search index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub url: String,
    pub excerpt: String,
}

impl SearchEntry {
    /// Case-insensitive substring match on title, content or any tag.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t.to_lowercase().contains(needle)))
    }
}
