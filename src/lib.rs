//! # Tessera
//!
//! A weighted lexical indexing and term-resolution library for
//! knowledge-base matching.
//!
//! ## Features
//!
//! - Bidirectional name ↔ class index with per-entry provenance
//! - Weighted disambiguation with a strict tie rule
//! - Formula-aware normalization and injectable English stemming
//! - Synonym synthesis by parenthetical removal and stop-word trimming
//! - Tab-separated persistence with documented lossiness

pub mod analysis;
pub mod error;
pub mod lexicon;
pub mod mapping;
pub mod settings;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::{PorterStemmer, Stemmer, StopWords};
    pub use crate::error::{Result, TesseraError};
    pub use crate::lexicon::{ClassId, LexicalCategory, Lexicon, LexiconConfig, Provenance};
    pub use crate::mapping::{Mapping, MappingRelation};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
