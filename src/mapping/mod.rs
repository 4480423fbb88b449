//! Scored correspondences between classes of two knowledge bases.
//!
//! A [`Mapping`] is the immutable value object the alignment stage records
//! for every candidate correspondence. Mappings are ordered purely by
//! similarity, which lets an alignment sort itself and pick the best
//! mapping for a class, and are equal when they connect the same pair of
//! classes in either direction, which lets an alignment find redundant
//! candidates irrespective of score.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::lexicon::lexicon::ClassId;
use crate::lexicon::provenance::round_weight;

/// The semantic relationship a mapping asserts between two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingRelation {
    /// The classes are equivalent.
    Equivalence,
    /// The source class subsumes the target class.
    Superclass,
    /// The source class is subsumed by the target class.
    Subclass,
    /// The classes overlap without subsumption.
    Overlap,
    /// The relationship is unknown.
    Unknown,
}

impl MappingRelation {
    /// The symbol used in alignment output.
    pub fn symbol(&self) -> &'static str {
        match self {
            MappingRelation::Equivalence => "=",
            MappingRelation::Superclass => ">",
            MappingRelation::Subclass => "<",
            MappingRelation::Overlap => "^",
            MappingRelation::Unknown => "?",
        }
    }

    /// Parse a relation from its symbol; anything unrecognized is
    /// [`MappingRelation::Unknown`].
    pub fn parse(s: &str) -> MappingRelation {
        match s.trim() {
            "=" => MappingRelation::Equivalence,
            ">" => MappingRelation::Superclass,
            "<" => MappingRelation::Subclass,
            "^" => MappingRelation::Overlap,
            _ => MappingRelation::Unknown,
        }
    }

    /// The relation read in the opposite direction.
    pub fn inverse(&self) -> MappingRelation {
        match self {
            MappingRelation::Superclass => MappingRelation::Subclass,
            MappingRelation::Subclass => MappingRelation::Superclass,
            rel => *rel,
        }
    }
}

impl fmt::Display for MappingRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A scored correspondence between a source and a target class.
///
/// The similarity is rounded to 4 decimal digits on construction and on
/// every update. Equality and hashing consider only the unordered pair of
/// class identifiers; ordering for sorting considers only the similarity
/// (see [`cmp_by_similarity`](Mapping::cmp_by_similarity) — `Ord` is
/// deliberately not implemented because pair equality and similarity
/// ordering are different relations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    source_id: ClassId,
    target_id: ClassId,
    similarity: f64,
    relation: MappingRelation,
}

impl Mapping {
    /// Create an equivalence mapping with similarity 1.0.
    pub fn new(source_id: ClassId, target_id: ClassId) -> Self {
        Self::with_similarity(source_id, target_id, 1.0)
    }

    /// Create an equivalence mapping with the given similarity.
    pub fn with_similarity(source_id: ClassId, target_id: ClassId, similarity: f64) -> Self {
        Self::with_relation(source_id, target_id, similarity, MappingRelation::Equivalence)
    }

    /// Create a mapping with the given similarity and relation.
    pub fn with_relation(
        source_id: ClassId,
        target_id: ClassId,
        similarity: f64,
        relation: MappingRelation,
    ) -> Self {
        Mapping {
            source_id,
            target_id,
            similarity: round_weight(similarity),
            relation,
        }
    }

    /// The id of the source class.
    pub fn source_id(&self) -> ClassId {
        self.source_id
    }

    /// The id of the target class.
    pub fn target_id(&self) -> ClassId {
        self.target_id
    }

    /// The similarity between the classes, in [0, 1].
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// The relation between the classes.
    pub fn relation(&self) -> MappingRelation {
        self.relation
    }

    /// Update the similarity, rounding to 4 decimals.
    pub fn set_similarity(&mut self, similarity: f64) {
        self.similarity = round_weight(similarity);
    }

    /// Update the relation.
    pub fn set_relation(&mut self, relation: MappingRelation) {
        self.relation = relation;
    }

    /// Compare two mappings by similarity alone, for sorting alignments.
    pub fn cmp_by_similarity(&self, other: &Mapping) -> Ordering {
        self.similarity.total_cmp(&other.similarity)
    }
}

impl PartialEq for Mapping {
    /// Two mappings are equal when they connect the same pair of classes,
    /// in either direction, irrespective of similarity or relation.
    fn eq(&self, other: &Self) -> bool {
        (self.source_id == other.source_id && self.target_id == other.target_id)
            || (self.source_id == other.target_id && self.target_id == other.source_id)
    }
}

impl Eq for Mapping {}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lo, hi) = if self.source_id <= self.target_id {
            (self.source_id, self.target_id)
        } else {
            (self.target_id, self.source_id)
        };
        lo.hash(state);
        hi.hash(state);
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.source_id, self.relation, self.target_id, self.similarity
        )
    }
}
