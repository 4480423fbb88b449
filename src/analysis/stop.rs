//! Stop-word support for synonym generation.
//!
//! The stop-word trimming synonym generator needs to know which tokens are
//! semantically empty. This module ships a default English list and a small
//! set type that also accepts caller-provided word lists.
//!
//! # Examples
//!
//! ```
//! use tessera::analysis::stop::StopWords;
//!
//! let stop = StopWords::new();
//! assert!(stop.contains("the"));
//! assert!(!stop.contains("atrium"));
//! ```

use ahash::AHashSet;

/// Default English stop words list.
///
/// Common English words that carry no discriminative lexical signal.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A set of stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// Create a stop-word set with the default English words.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a stop-word set from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
