//! Weighted lexical index mapping classes to their names and synonyms.
//!
//! Entries are weighted according to their provenance; competing classes
//! for an ambiguous name are disambiguated by weighted scoring with a
//! strict tie rule.

pub mod category;
pub mod config;
pub mod lexicon;
pub mod multimap;
pub mod provenance;
mod synonym;

// Re-export commonly used types
pub use category::LexicalCategory;
pub use config::LexiconConfig;
pub use lexicon::{ClassId, Lexicon};
pub use multimap::BiMultimap;
pub use provenance::{Provenance, round_weight};
