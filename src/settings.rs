//! Settings enumerations shared with the surrounding matching system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The string similarity measures selectable for residual fuzzy matching.
///
/// The lexicon normalizes names before any of these run downstream; the
/// measures themselves are implemented by the string matcher, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringSimMeasure {
    /// The ISub measure.
    ISub,
    /// Levenshtein edit distance.
    Edit,
    /// Jaro-Winkler similarity.
    JaroWinkler,
    /// Q-gram overlap.
    QGram,
}

impl StringSimMeasure {
    /// All measures, in declaration order.
    pub const ALL: &'static [StringSimMeasure] = &[
        StringSimMeasure::ISub,
        StringSimMeasure::Edit,
        StringSimMeasure::JaroWinkler,
        StringSimMeasure::QGram,
    ];

    /// Parse a measure from its display form, case-insensitively.
    pub fn parse(s: &str) -> Option<StringSimMeasure> {
        Self::ALL
            .iter()
            .find(|m| s.eq_ignore_ascii_case(&m.to_string()))
            .copied()
    }
}

impl fmt::Display for StringSimMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StringSimMeasure::ISub => "ISub",
            StringSimMeasure::Edit => "Levenshtein",
            StringSimMeasure::JaroWinkler => "Jaro-Winkler",
            StringSimMeasure::QGram => "Q-gram",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for measure in StringSimMeasure::ALL {
            assert_eq!(StringSimMeasure::parse(&measure.to_string()), Some(*measure));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            StringSimMeasure::parse("jaro-winkler"),
            Some(StringSimMeasure::JaroWinkler)
        );
        assert_eq!(StringSimMeasure::parse("cosine"), None);
    }
}
