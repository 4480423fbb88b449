//! Stemming support for lexicon index keys.
//!
//! Stemming is an injectable capability: the lexicon holds a boxed
//! [`Stemmer`] and never depends on a concrete algorithm, so non-English
//! or alternative-algorithm deployments can substitute implementations.

pub mod identity;
pub mod porter;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Stem each whitespace-separated token of a phrase and rejoin the results
/// with single spaces.
pub fn stem_phrase(stemmer: &dyn Stemmer, phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|token| stemmer.stem(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_phrase() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stem_phrase(&stemmer, "running flies"), "run fli");
        assert_eq!(stem_phrase(&stemmer, "  heart   valves "), "heart valv");
        assert_eq!(stem_phrase(&stemmer, ""), "");
    }

    #[test]
    fn test_stem_phrase_identity() {
        let stemmer = IdentityStemmer::new();
        assert_eq!(stem_phrase(&stemmer, "running flies"), "running flies");
    }
}
