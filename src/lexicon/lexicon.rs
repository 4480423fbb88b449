//! The lexicon: a weighted, bidirectional index between names and classes.
//!
//! A [`Lexicon`] maps every class of a knowledge base to its names and
//! synonyms and back, with a provenance record attached to each pair. It
//! is populated incrementally through the add path, queried throughout the
//! matching pipeline, and optionally persisted as tab-separated text. It is
//! append-only: no entry is ever removed for the lifetime of the process.
//!
//! # Examples
//!
//! ```
//! use tessera::lexicon::{LexicalCategory, Lexicon};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add(7, "Heart Valve", LexicalCategory::Label, "", 1.0);
//! lexicon.add(9, "Valve", LexicalCategory::ExactSynonym, "", 0.95);
//!
//! let key = lexicon.index_key("heart valves");
//! assert_eq!(lexicon.best_class(&key, false), Some(7));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::normalize;
use crate::analysis::stem::{PorterStemmer, Stemmer, stem_phrase};
use crate::error::{Result, TesseraError};
use crate::lexicon::category::LexicalCategory;
use crate::lexicon::config::LexiconConfig;
use crate::lexicon::multimap::BiMultimap;
use crate::lexicon::provenance::Provenance;

/// Opaque integer handle for a class in the owning knowledge base. The
/// lexicon never interprets its value.
pub type ClassId = u32;

/// Weighted lexical index of a knowledge base.
///
/// Single-threaded and synchronous; callers needing concurrent readers
/// should hand each one a deep copy via [`Clone`].
#[derive(Clone)]
pub struct Lexicon {
    /// Name ↔ class table; every entry is reachable from both directions.
    table: BiMultimap<String, ClassId, Provenance>,
    /// Canonical label per class, in normalized unstemmed form.
    corrected_names: AHashMap<ClassId, String>,
    /// Inverse of `corrected_names`.
    corrected_classes: AHashMap<String, ClassId>,
    /// Entries accepted per language; never decremented.
    lang_count: AHashMap<String, u64>,
    /// Ad-hoc synonyms registered outside the weighted index.
    extra_synonyms: AHashMap<ClassId, BTreeSet<String>>,
    stemmer: Arc<dyn Stemmer>,
    config: LexiconConfig,
}

impl Lexicon {
    /// Create a new empty lexicon with the Porter stemmer and default
    /// configuration.
    pub fn new() -> Self {
        Self::with_config(LexiconConfig::default())
    }

    /// Create a new empty lexicon with the given configuration.
    pub fn with_config(config: LexiconConfig) -> Self {
        Lexicon {
            table: BiMultimap::new(),
            corrected_names: AHashMap::new(),
            corrected_classes: AHashMap::new(),
            lang_count: AHashMap::new(),
            extra_synonyms: AHashMap::new(),
            stemmer: Arc::new(PorterStemmer::new()),
            config,
        }
    }

    /// Create a new empty lexicon with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        Lexicon {
            stemmer,
            ..Self::new()
        }
    }

    /// The lexicon configuration.
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    // -- Add path ----------------------------------------------------------

    /// Add an entry in the default language, stemmed.
    ///
    /// Empty names, and names without any Latin letter when the default
    /// language is English, are silently ignored: upstream extraction is
    /// messy and unusable names are not an error.
    pub fn add(
        &mut self,
        class_id: ClassId,
        raw: &str,
        category: LexicalCategory,
        source: &str,
        weight: f64,
    ) {
        let lang = self.config.default_language.clone();
        self.add_with_options(class_id, raw, &lang, category, source, weight, true);
    }

    /// Add an entry with an explicit language tag.
    ///
    /// Non-English names are normalized as formulas and bypass stemming
    /// entirely; English names follow the plain add path.
    pub fn add_with_language(
        &mut self,
        class_id: ClassId,
        raw: &str,
        language: &str,
        category: LexicalCategory,
        source: &str,
        weight: f64,
    ) {
        self.add_with_options(class_id, raw, language, category, source, weight, true);
    }

    /// Add an entry with full control over language and stemming.
    ///
    /// The name index holds exactly one form per accepted add: the stemmed
    /// form when `stem` is set and the language is English, the normalized
    /// form otherwise. The unstemmed normalized label of a class is always
    /// retrievable through [`corrected_name`](Self::corrected_name).
    #[allow(clippy::too_many_arguments)]
    pub fn add_with_options(
        &mut self,
        class_id: ClassId,
        raw: &str,
        language: &str,
        category: LexicalCategory,
        source: &str,
        weight: f64,
        stem: bool,
    ) {
        if raw.is_empty() {
            return;
        }

        let (normalized, effective_category) = if language != "en" {
            (normalize::normalize_formula(raw), category)
        } else if !normalize::has_latin(raw) {
            return;
        } else if normalize::is_formula(raw) {
            (normalize::normalize_formula(raw), LexicalCategory::Formula)
        } else {
            (normalize::normalize_name(raw), category)
        };

        let name = if stem && language == "en" {
            stem_phrase(self.stemmer.as_ref(), &normalized)
        } else {
            normalized.clone()
        };

        // Label bookkeeping keys on the declared category even when the
        // name itself was reclassified as a formula, and stores the
        // unstemmed normalized form: labels stay human-readable while
        // index keys are stemmed. Last write wins.
        if category == LexicalCategory::Label {
            self.corrected_names.insert(class_id, normalized.clone());
            self.corrected_classes.insert(normalized, class_id);
        }

        let provenance = Provenance::new(effective_category, source, language, weight);
        self.table.add(name, class_id, provenance);

        *self.lang_count.entry(language.to_string()).or_insert(0) += 1;
    }

    /// Register an ad-hoc synonym for a class, outside the weighted index.
    pub fn add_extra_synonym(&mut self, class_id: ClassId, raw: &str) {
        let key = stem_phrase(self.stemmer.as_ref(), &normalize::normalize_name(raw));
        self.extra_synonyms.entry(class_id).or_default().insert(key);
    }

    /// The ad-hoc synonyms registered via
    /// [`add_extra_synonym`](Self::add_extra_synonym).
    pub fn extra_synonyms(&self) -> &AHashMap<ClassId, BTreeSet<String>> {
        &self.extra_synonyms
    }

    /// Normalize and stem a raw surface form into the key used by the name
    /// index, so callers can query with raw strings.
    pub fn index_key(&self, raw: &str) -> String {
        let normalized = if normalize::is_formula(raw) {
            normalize::normalize_formula(raw)
        } else {
            normalize::normalize_name(raw)
        };
        stem_phrase(self.stemmer.as_ref(), &normalized)
    }

    // -- Counts ------------------------------------------------------------

    /// Number of distinct names in the lexicon.
    pub fn name_count(&self) -> usize {
        self.table.key_count()
    }

    /// Number of distinct classes in the lexicon.
    pub fn class_count(&self) -> usize {
        self.table.second_key_count()
    }

    /// Total number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of entries associated with the name, across all classes.
    pub fn class_count_of(&self, name: &str) -> usize {
        self.table.entry_count(name)
    }

    /// Number of classes associated with the name with the given category.
    pub fn class_count_of_category(&self, name: &str, category: LexicalCategory) -> usize {
        self.classes_of_category(name, category).len()
    }

    /// Number of entries associated with the class, across all names.
    pub fn name_count_of(&self, class_id: ClassId) -> usize {
        self.table.entry_count_second(&class_id)
    }

    /// Number of distinct names of the given category associated with the
    /// class.
    pub fn name_count_of_category(&self, class_id: ClassId, category: LexicalCategory) -> usize {
        self.names_of_category(class_id, category).len()
    }

    /// Number of provenances with the given category and language
    /// associated with the class.
    pub fn name_count_with_language(
        &self,
        class_id: ClassId,
        category: LexicalCategory,
        language: &str,
    ) -> usize {
        self.table
            .first_keys_of(&class_id)
            .map(|n| {
                self.table
                    .get(n.as_str(), &class_id)
                    .iter()
                    .filter(|p| p.category() == category && p.language() == language)
                    .count()
            })
            .sum()
    }

    /// Number of entries accepted with the given language.
    pub fn language_count(&self, language: &str) -> u64 {
        self.lang_count.get(language).copied().unwrap_or(0)
    }

    // -- Membership --------------------------------------------------------

    /// Whether the lexicon contains the name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Whether the lexicon contains the name for the class.
    pub fn contains(&self, class_id: ClassId, name: &str) -> bool {
        self.table.contains_pair(name, &class_id)
    }

    /// Whether the class has lexical signal beyond short symbolic
    /// formulas: at least one name of length ≥ 10, or any name with a
    /// non-formula provenance.
    pub fn contains_non_small_formula(&self, class_id: ClassId) -> bool {
        self.table.first_keys_of(&class_id).any(|n| {
            n.chars().count() >= 10
                || self
                    .table
                    .get(n.as_str(), &class_id)
                    .iter()
                    .any(|p| p.category() != LexicalCategory::Formula)
        })
    }

    // -- Set queries -------------------------------------------------------

    /// The provenances associated with the (name, class) pair, empty when
    /// the pair is absent.
    pub fn provenances(&self, name: &str, class_id: ClassId) -> Vec<&Provenance> {
        self.table.get(name, &class_id)
    }

    /// All classes in the lexicon.
    pub fn classes(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.table.second_keys().copied()
    }

    /// All names in the lexicon.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.first_keys().map(String::as_str)
    }

    /// The classes associated with the name.
    pub fn classes_of(&self, name: &str) -> AHashSet<ClassId> {
        self.table.second_keys_of(name).copied().collect()
    }

    /// The names associated with the class.
    pub fn names_of(&self, class_id: ClassId) -> AHashSet<&str> {
        self.table.first_keys_of(&class_id).map(String::as_str).collect()
    }

    /// The classes associated with the name with the given category.
    pub fn classes_of_category(&self, name: &str, category: LexicalCategory) -> AHashSet<ClassId> {
        self.table
            .second_keys_of(name)
            .copied()
            .filter(|&id| {
                self.table
                    .get(name, &id)
                    .iter()
                    .any(|p| p.category() == category)
            })
            .collect()
    }

    /// The classes associated with the name with the given language.
    pub fn classes_with_language(&self, name: &str, language: &str) -> AHashSet<ClassId> {
        self.table
            .second_keys_of(name)
            .copied()
            .filter(|&id| {
                self.table
                    .get(name, &id)
                    .iter()
                    .any(|p| p.language() == language)
            })
            .collect()
    }

    /// The classes that have at least one name from the given source.
    pub fn classes_with_source(&self, source: &str) -> Vec<ClassId> {
        self.classes()
            .filter(|&id| self.has_name_from_source(id, source))
            .collect()
    }

    /// The names of the given category associated with the class.
    pub fn names_of_category(
        &self,
        class_id: ClassId,
        category: LexicalCategory,
    ) -> AHashSet<&str> {
        self.table
            .first_keys_of(&class_id)
            .filter(|n| {
                self.table
                    .get(n.as_str(), &class_id)
                    .iter()
                    .any(|p| p.category() == category)
            })
            .map(String::as_str)
            .collect()
    }

    /// The names with the given language associated with the class.
    pub fn names_with_language(&self, class_id: ClassId, language: &str) -> AHashSet<&str> {
        self.table
            .first_keys_of(&class_id)
            .filter(|n| {
                self.table
                    .get(n.as_str(), &class_id)
                    .iter()
                    .any(|p| p.language() == language)
            })
            .map(String::as_str)
            .collect()
    }

    /// The classes associated with the name through at least one
    /// non-external provenance.
    pub fn internal_classes(&self, name: &str) -> AHashSet<ClassId> {
        self.table
            .second_keys_of(name)
            .copied()
            .filter(|&id| !self.is_external(name, id))
            .collect()
    }

    /// The names associated with the class through at least one
    /// non-external provenance.
    pub fn internal_names(&self, class_id: ClassId) -> AHashSet<&str> {
        self.table
            .first_keys_of(&class_id)
            .filter(|n| !self.is_external(n.as_str(), class_id))
            .map(String::as_str)
            .collect()
    }

    /// The classes that have at least one external name.
    pub fn extended_classes(&self) -> AHashSet<ClassId> {
        self.classes()
            .filter(|&id| self.has_external_name(id))
            .collect()
    }

    /// The languages present in the lexicon.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.lang_count.keys().map(String::as_str)
    }

    /// The languages declared for the name, across all its classes.
    pub fn languages_of(&self, name: &str) -> AHashSet<&str> {
        self.table
            .second_keys_of(name)
            .flat_map(|id| self.table.get(name, id))
            .map(|p| p.language())
            .collect()
    }

    /// The languages declared for the (name, class) pair.
    pub fn languages_of_pair(&self, name: &str, class_id: ClassId) -> AHashSet<&str> {
        self.provenances(name, class_id)
            .into_iter()
            .map(|p| p.language())
            .collect()
    }

    /// The sources of the name for the class.
    pub fn sources(&self, name: &str, class_id: ClassId) -> AHashSet<&str> {
        self.provenances(name, class_id)
            .into_iter()
            .map(|p| p.source())
            .collect()
    }

    /// The categories of the name for the class.
    pub fn categories(&self, name: &str, class_id: ClassId) -> AHashSet<LexicalCategory> {
        self.provenances(name, class_id)
            .into_iter()
            .map(|p| p.category())
            .collect()
    }

    // -- Weights & disambiguation ------------------------------------------

    /// The maximum provenance weight of the name for the class, or 0 when
    /// the pair is absent.
    pub fn weight(&self, name: &str, class_id: ClassId) -> f64 {
        self.provenances(name, class_id)
            .iter()
            .map(|p| p.weight())
            .fold(0.0, f64::max)
    }

    /// The weight of the first provenance of the pair declared with the
    /// given language, or 0 when none matches.
    pub fn weight_with_language(&self, name: &str, class_id: ClassId, language: &str) -> f64 {
        self.provenances(name, class_id)
            .iter()
            .find(|p| p.language() == language)
            .map(|p| p.weight())
            .unwrap_or(0.0)
    }

    /// The maximum provenance weight of the pair, discounted by a fan-out
    /// penalty: classes with many same-category names are less
    /// discriminative per name, so each name's evidentiary value drops by
    /// (same-category name count) / 100.
    pub fn corrected_weight(&self, name: &str, class_id: ClassId) -> f64 {
        let mut weight = 0.0;
        let mut correction = 0.0;
        for p in self.provenances(name, class_id) {
            if p.weight() > weight {
                weight = p.weight();
                correction = self.name_count_of_category(class_id, p.category()) as f64 / 100.0;
            }
        }
        weight - correction
    }

    /// Language-qualified [`corrected_weight`](Self::corrected_weight):
    /// the fan-out penalty counts only names sharing the provenance's
    /// language.
    pub fn corrected_weight_with_language(
        &self,
        name: &str,
        class_id: ClassId,
        language: &str,
    ) -> f64 {
        for p in self.provenances(name, class_id) {
            if p.language() == language {
                let correction = self
                    .name_count_with_language(class_id, p.category(), language)
                    as f64
                    / 100.0;
                return p.weight() - correction;
            }
        }
        0.0
    }

    /// The category of the highest-weight provenance of the pair.
    pub fn best_category(&self, name: &str, class_id: ClassId) -> Option<LexicalCategory> {
        let mut best: Option<(f64, LexicalCategory)> = None;
        for p in self.provenances(name, class_id) {
            if best.is_none_or(|(w, _)| p.weight() > w) {
                best = Some((p.weight(), p.category()));
            }
        }
        best.map(|(_, category)| category)
    }

    /// The class associated with the name that has the highest weight,
    /// optionally restricted to internal entries.
    ///
    /// Returns `None` on zero hits or when two or more classes tie at the
    /// maximum weight: a tie is insufficient evidence, never broken
    /// arbitrarily.
    pub fn best_class(&self, name: &str, internal: bool) -> Option<ClassId> {
        let hits = if internal {
            self.internal_classes(name)
        } else {
            self.classes_of(name)
        };

        let mut best: Vec<ClassId> = Vec::new();
        let mut max_weight = 0.0;
        for id in hits {
            let weight = self.weight(name, id);
            if weight > max_weight {
                max_weight = weight;
                best.clear();
                best.push(id);
            } else if weight == max_weight {
                best.push(id);
            }
        }

        if best.len() == 1 { Some(best[0]) } else { None }
    }

    /// The name associated with the class that has the highest weight,
    /// preferring names in the configured label language and falling back
    /// to all internal names. Ties keep the first name found; an unknown
    /// class yields an empty string.
    pub fn best_name(&self, class_id: ClassId) -> String {
        let mut hits = self.names_with_language(class_id, &self.config.label_language);
        if hits.is_empty() {
            hits = self.internal_names(class_id);
        }

        let mut best = "";
        let mut max_weight = 0.0;
        for name in hits {
            let weight = self.weight(name, class_id);
            if weight > max_weight {
                max_weight = weight;
                best = name;
            }
        }
        best.to_string()
    }

    /// The canonical label of the class, in normalized unstemmed form.
    pub fn corrected_name(&self, class_id: ClassId) -> Option<&str> {
        self.corrected_names.get(&class_id).map(String::as_str)
    }

    /// The class whose canonical label is the given normalized string.
    pub fn corrected_class(&self, name: &str) -> Option<ClassId> {
        self.corrected_classes.get(name).copied()
    }

    // -- External/internal classification ----------------------------------

    /// Whether every provenance of the (name, class) pair is external.
    /// A single non-external provenance makes the pair internal; an absent
    /// pair is not external.
    pub fn is_external(&self, name: &str, class_id: ClassId) -> bool {
        let provenances = self.provenances(name, class_id);
        !provenances.is_empty() && provenances.iter().all(|p| p.is_external())
    }

    /// Whether the pair has an external provenance with the given language.
    pub fn is_external_with_language(
        &self,
        name: &str,
        class_id: ClassId,
        language: &str,
    ) -> bool {
        self.provenances(name, class_id)
            .iter()
            .any(|p| p.language() == language && p.is_external())
    }

    /// Whether the class has at least one external name.
    pub fn has_external_name(&self, class_id: ClassId) -> bool {
        self.table
            .first_keys_of(&class_id)
            .any(|n| self.is_external(n.as_str(), class_id))
    }

    /// Whether the class has at least one name from the given source.
    pub fn has_name_from_source(&self, class_id: ClassId, source: &str) -> bool {
        self.table.first_keys_of(&class_id).any(|n| {
            self.table
                .get(n.as_str(), &class_id)
                .iter()
                .any(|p| p.source() == source)
        })
    }

    // -- Persistence -------------------------------------------------------

    /// Save the lexicon to a file: one line per (class, name) pair, as
    /// `class_id \t name \t best_category`. Weights, sources, and
    /// languages are not persisted.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        for class_id in self.table.second_keys() {
            for name in self.table.first_keys_of(class_id) {
                let category = self
                    .best_category(name, *class_id)
                    .unwrap_or(LexicalCategory::OtherSynonym);
                writeln!(out, "{class_id}\t{name}\t{category}")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Read a lexicon from a file written by [`save`](Self::save).
    ///
    /// Every entry is re-added with its category's default weight, an
    /// empty source, and the default language: the round trip is
    /// intentionally lossy. Malformed lines are a fatal parse failure; the
    /// caller must treat a failed load as "no lexicon available".
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lexicon = Lexicon::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return Err(TesseraError::parse(format!(
                    "line {}: expected 3 tab-separated fields, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }
            let class_id: ClassId = fields[0].parse().map_err(|_| {
                TesseraError::parse(format!(
                    "line {}: invalid class id '{}'",
                    line_no + 1,
                    fields[0]
                ))
            })?;
            let category = LexicalCategory::parse(fields[2]).ok_or_else(|| {
                TesseraError::parse(format!(
                    "line {}: unknown lexical category '{}'",
                    line_no + 1,
                    fields[2]
                ))
            })?;
            lexicon.add(class_id, fields[1], category, "", category.default_weight());
        }

        Ok(lexicon)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("names", &self.table.key_count())
            .field("classes", &self.table.second_key_count())
            .field("entries", &self.table.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "Left Atrium", LexicalCategory::Label, "", 1.0);

        assert_eq!(lexicon.name_count(), 1);
        assert_eq!(lexicon.class_count(), 1);
        assert!(lexicon.contains_name("left atrium"));
        assert_eq!(lexicon.weight("left atrium", 1), 1.0);
        assert_eq!(lexicon.language_count("en"), 1);
    }

    #[test]
    fn test_stemmed_index_key() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "Heart Valves", LexicalCategory::Label, "", 1.0);

        // the index key is stemmed; the corrected label is not
        assert!(lexicon.contains_name("heart valv"));
        assert!(!lexicon.contains_name("heart valves"));
        assert_eq!(lexicon.corrected_name(1), Some("heart valves"));
        assert_eq!(lexicon.corrected_class("heart valves"), Some(1));
        assert_eq!(lexicon.index_key("Heart Valves"), "heart valv");
    }

    #[test]
    fn test_rejects_unusable_names() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "", LexicalCategory::Label, "", 1.0);
        lexicon.add(1, "12345", LexicalCategory::Label, "", 1.0);
        lexicon.add(1, "心臓", LexicalCategory::Label, "", 1.0);

        assert!(lexicon.is_empty());
        assert_eq!(lexicon.name_count(), 0);
        assert_eq!(lexicon.class_count(), 0);
        assert_eq!(lexicon.language_count("en"), 0);
    }

    #[test]
    fn test_formula_reclassification() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "H2O", LexicalCategory::Label, "", 1.0);

        let key = lexicon.index_key("H2O");
        assert_eq!(key, "h2o");
        assert_eq!(
            lexicon.categories(&key, 1).into_iter().collect::<Vec<_>>(),
            vec![LexicalCategory::Formula]
        );
        // label bookkeeping still keys on the declared category
        assert_eq!(lexicon.corrected_name(1), Some("h2o"));
    }

    #[test]
    fn test_non_english_bypasses_stemming() {
        let mut lexicon = Lexicon::new();
        lexicon.add_with_language(1, "Linke Vorhöfe", "de", LexicalCategory::Label, "", 1.0);

        assert!(lexicon.contains_name("linke vorhöfe"));
        assert_eq!(lexicon.language_count("de"), 1);
        assert_eq!(lexicon.language_count("en"), 0);
    }

    #[test]
    fn test_unstemmed_option() {
        let mut lexicon = Lexicon::new();
        lexicon.add_with_options(
            1,
            "Heart Valves",
            "en",
            LexicalCategory::ExactSynonym,
            "",
            0.95,
            false,
        );

        assert!(lexicon.contains_name("heart valves"));
        assert!(!lexicon.contains_name("heart valv"));
    }

    #[test]
    fn test_multiple_provenances_keep_max_weight() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "cortex", LexicalCategory::OtherSynonym, "", 0.85);
        lexicon.add(1, "cortex", LexicalCategory::Label, "", 1.0);

        assert_eq!(lexicon.provenances("cortex", 1).len(), 2);
        assert_eq!(lexicon.weight("cortex", 1), 1.0);
        assert_eq!(lexicon.best_category("cortex", 1), Some(LexicalCategory::Label));
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.name_count(), 1);
    }

    #[test]
    fn test_best_name_prefers_label_language() {
        let mut lexicon = Lexicon::new();
        lexicon.add_with_language(1, "herzklappe", "de", LexicalCategory::Label, "", 1.0);
        lexicon.add(1, "heart valve", LexicalCategory::ExactSynonym, "", 0.95);

        assert_eq!(lexicon.best_name(1), "heart valv");
    }

    #[test]
    fn test_corrected_weight_penalty() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "renal cortex", LexicalCategory::ExactSynonym, "", 0.95);
        lexicon.add(1, "kidney cortex", LexicalCategory::ExactSynonym, "", 0.95);

        // two names of the same category: penalty is 2/100
        let corrected = lexicon.corrected_weight("renal cortex", 1);
        assert!((corrected - 0.93).abs() < 1e-9);
        assert_eq!(lexicon.corrected_weight("absent", 1), 0.0);
    }

    #[test]
    fn test_extra_synonyms() {
        let mut lexicon = Lexicon::new();
        lexicon.add_extra_synonym(4, "Heart Valves");
        lexicon.add_extra_synonym(4, "Cardiac Valves");

        let synonyms = lexicon.extra_synonyms().get(&4).unwrap();
        assert!(synonyms.contains("heart valv"));
        assert!(synonyms.contains("cardiac valv"));
        // the registry is separate from the weighted index
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_contains_non_small_formula() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "H2O", LexicalCategory::Label, "", 1.0);
        assert!(!lexicon.contains_non_small_formula(1));

        lexicon.add(2, "C6H12O6 + 6O2", LexicalCategory::Label, "", 1.0);
        assert!(lexicon.contains_non_small_formula(2)); // length ≥ 10

        lexicon.add(1, "water", LexicalCategory::ExactSynonym, "", 0.95);
        assert!(lexicon.contains_non_small_formula(1)); // non-formula name
    }

    #[test]
    fn test_debug_summary() {
        let mut lexicon = Lexicon::new();
        lexicon.add(1, "heart", LexicalCategory::Label, "", 1.0);

        let debug = format!("{lexicon:?}");
        assert!(debug.contains("Lexicon"));
        assert!(debug.contains("porter"));
    }
}
