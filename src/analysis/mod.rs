//! Text analysis for lexicon index keys.
//!
//! This module provides the pure text transforms the lexicon applies before
//! indexing a surface form: formula detection, name normalization, English
//! stemming, and the stop-word set used by synonym generation.

pub mod normalize;
pub mod stem;
pub mod stop;

// Re-export commonly used types
pub use normalize::{has_latin, is_formula, normalize_formula, normalize_name};
pub use stem::{IdentityStemmer, PorterStemmer, Stemmer, stem_phrase};
pub use stop::StopWords;
