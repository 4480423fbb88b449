//! Configuration for the lexicon.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Lexicon`](crate::lexicon::Lexicon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Language preferred when selecting a class's display name.
    pub label_language: String,

    /// Language assumed for entries added without an explicit tag.
    pub default_language: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            label_language: "en".to_string(),
            default_language: "en".to_string(),
        }
    }
}
