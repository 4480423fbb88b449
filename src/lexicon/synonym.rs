//! Synonym generation over the lexicon's current name set.
//!
//! Two stateless text-transformation heuristics derive additional synonym
//! entries from names already in the index and feed them back through the
//! add path with [`LexicalCategory::InternalSynonym`] and an attenuated
//! weight. Both operate over a snapshot of the name set taken before the
//! pass starts, so synonyms produced in one pass are never expanded within
//! that same pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::normalize;
use crate::analysis::stop::StopWords;
use crate::lexicon::category::LexicalCategory;
use crate::lexicon::lexicon::{ClassId, Lexicon};
use crate::lexicon::provenance::Provenance;

/// A name that is exactly one parenthesized group.
static WHOLE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^()]+\)$").expect("group pattern should compile"));

impl Lexicon {
    /// Generate synonyms by removing parenthesized sections of names.
    ///
    /// For every non-formula name containing balanced parentheses:
    /// - a name that is exactly one parenthesized group, or that contains
    ///   `") or ("`, keeps its full text with the parentheses stripped
    ///   (weight factor 1.0);
    /// - a name with interleaved `)(` segments is skipped as ambiguous;
    /// - otherwise each parenthesized span is removed and the weight factor
    ///   is sqrt(remaining length / original length), so light truncation
    ///   is trusted almost as much as the original.
    pub fn generate_parenthesis_synonyms(&mut self) {
        let snapshot: Vec<String> = self.names().map(str::to_string).collect();
        for name in snapshot {
            if normalize::is_formula(&name) || !name.contains('(') || !name.contains(')') {
                continue;
            }
            let Some((synonym, factor)) = parenthesis_synonym(&name) else {
                continue;
            };
            self.add_derived(&name, &synonym, factor);
        }
    }

    /// Generate synonyms by removing leading and trailing stop words from
    /// names, with a flat weight factor of 0.9.
    pub fn generate_stop_word_synonyms(&mut self, stop_words: &StopWords) {
        let snapshot: Vec<String> = self.names().map(str::to_string).collect();
        for name in snapshot {
            if normalize::is_formula(&name) {
                continue;
            }
            let words: Vec<&str> = name.split_whitespace().collect();
            let Some(start) = words.iter().position(|w| !stop_words.contains(w)) else {
                continue;
            };
            let Some(end) = words.iter().rposition(|w| !stop_words.contains(w)) else {
                continue;
            };
            // nothing to trim
            if start == 0 && end == words.len() - 1 {
                continue;
            }
            let synonym = words[start..=end].join(" ");
            self.add_derived(&name, &synonym, 0.9);
        }
    }

    /// Attach a derived synonym to every internal class of the source
    /// name, once per source provenance, with the attenuated weight.
    fn add_derived(&mut self, name: &str, synonym: &str, factor: f64) {
        let classes: Vec<ClassId> = self.internal_classes(name).into_iter().collect();
        for class_id in classes {
            let provenances: Vec<Provenance> = self
                .provenances(name, class_id)
                .into_iter()
                .cloned()
                .collect();
            for p in provenances {
                self.add_with_language(
                    class_id,
                    synonym,
                    p.language(),
                    LexicalCategory::InternalSynonym,
                    p.source(),
                    factor * p.weight(),
                );
            }
        }
    }
}

/// Compute the parenthesis-stripped synonym of a name and its weight
/// factor, or `None` when the name is skipped.
fn parenthesis_synonym(name: &str) -> Option<(String, f64)> {
    if WHOLE_GROUP.is_match(name) || name.contains(") or (") {
        let stripped: String = name.chars().filter(|c| *c != '(' && *c != ')').collect();
        return Some((stripped, 1.0));
    }
    if name.contains(")(") {
        return None;
    }

    let mut kept = String::new();
    let mut copy = true;
    for c in name.chars() {
        if c == '(' {
            copy = false;
        }
        if copy {
            kept.push(c);
        }
        if c == ')' {
            copy = true;
        }
    }
    let stripped = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    if stripped.is_empty() {
        return None;
    }
    let factor = (stripped.len() as f64 / name.len() as f64).sqrt();
    Some((stripped, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesis_synonym_whole_group() {
        let (synonym, factor) = parenthesis_synonym("(left atrium)").unwrap();
        assert_eq!(synonym, "left atrium");
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_parenthesis_synonym_or_groups() {
        let (synonym, factor) = parenthesis_synonym("(left) or (right)").unwrap();
        assert_eq!(synonym, "left or right");
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_parenthesis_synonym_interleaved_skipped() {
        assert!(parenthesis_synonym("left)(right").is_none());
    }

    #[test]
    fn test_parenthesis_synonym_span_removal() {
        let (synonym, factor) = parenthesis_synonym("left atrium (heart)").unwrap();
        assert_eq!(synonym, "left atrium");
        assert!(factor > 0.0 && factor < 1.0);
        let expected = (synonym.len() as f64 / "left atrium (heart)".len() as f64).sqrt();
        assert!((factor - expected).abs() < 1e-12);
    }

    #[test]
    fn test_parenthesis_synonym_empty_result_skipped() {
        assert!(parenthesis_synonym("(a) (b)").is_none());
    }

    #[test]
    fn test_generate_parenthesis_synonyms() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "Left Atrium (Heart)", LexicalCategory::Label, "", 1.0);

        lexicon.generate_parenthesis_synonyms();

        let key = lexicon.index_key("left atrium");
        assert!(lexicon.contains(1, &key));
        let weight = lexicon.weight(&key, 1);
        assert!(weight > 0.0 && weight < 1.0);
        assert_eq!(
            lexicon.best_category(&key, 1),
            Some(LexicalCategory::InternalSynonym)
        );
    }

    #[test]
    fn test_parenthesis_synonyms_skip_external_classes() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "Left Atrium (Heart)", LexicalCategory::ExactSynonym, "wordnet", 0.85);

        lexicon.generate_parenthesis_synonyms();

        let key = lexicon.index_key("left atrium");
        assert!(!lexicon.contains(1, &key));
    }

    #[test]
    fn test_generate_stop_word_synonyms() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "the heart", LexicalCategory::Label, "", 1.0);
        lexicon.add(2, "heart", LexicalCategory::Label, "", 1.0);

        lexicon.generate_stop_word_synonyms(&StopWords::new());

        // "the heart" is trimmed to "heart", now also naming class 1
        let key = lexicon.index_key("heart");
        assert!(lexicon.contains(1, &key));
        assert!((lexicon.weight(&key, 1) - 0.9).abs() < 1e-9);
        // the untouched name gained nothing
        assert_eq!(lexicon.provenances(&key, 2).len(), 1);
    }

    #[test]
    fn test_stop_word_synonyms_skip_untrimmable_names() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "heart valve", LexicalCategory::Label, "", 1.0);
        lexicon.add(2, "the of and", LexicalCategory::ExactSynonym, "", 0.95);
        let before = lexicon.len();

        lexicon.generate_stop_word_synonyms(&StopWords::new());

        // no leading/trailing stop words, or nothing but stop words
        assert_eq!(lexicon.len(), before);
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "the left atrium (heart)", LexicalCategory::Label, "", 1.0);

        lexicon.generate_parenthesis_synonyms();

        // one pass derives exactly one synonym per source provenance
        let key = lexicon.index_key("the left atrium");
        assert_eq!(lexicon.provenances(&key, 1).len(), 1);
    }
}
