//! Indexed bidirectional multimap.
//!
//! A two-key, multi-value table giving O(1) average lookup by either key.
//! Values are stored once in an entry arena; the two index maps hold
//! integer offsets into it, so the first-key and second-key views can
//! never disagree and no value is duplicated between directions.
//!
//! # Examples
//!
//! ```
//! use tessera::lexicon::multimap::BiMultimap;
//!
//! let mut table: BiMultimap<String, u32, f64> = BiMultimap::new();
//! table.add("heart".to_string(), 7, 1.0);
//! table.add("heart".to_string(), 9, 0.8);
//!
//! assert_eq!(table.get("heart", &7), vec![&1.0]);
//! assert_eq!(table.entry_count("heart"), 2);
//! assert!(table.first_keys_of(&9).any(|name| name == "heart"));
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use ahash::AHashMap;

/// Two-key multimap indexed in both directions over a shared entry arena.
///
/// Grows monotonically: there is no removal operation. Deep copies are
/// made with [`Clone`].
#[derive(Debug, Clone)]
pub struct BiMultimap<K1, K2, V> {
    /// Shared value arena; index maps address entries by offset.
    entries: Vec<V>,
    by_first: AHashMap<K1, AHashMap<K2, Vec<u32>>>,
    by_second: AHashMap<K2, AHashMap<K1, Vec<u32>>>,
}

impl<K1, K2, V> BiMultimap<K1, K2, V>
where
    K1: Eq + Hash + Clone,
    K2: Eq + Hash + Clone,
{
    /// Create a new empty multimap.
    pub fn new() -> Self {
        BiMultimap {
            entries: Vec::new(),
            by_first: AHashMap::new(),
            by_second: AHashMap::new(),
        }
    }

    /// Append a value to the list stored at the (k1, k2) pair, creating the
    /// slot if absent and updating both direction indexes.
    pub fn add(&mut self, k1: K1, k2: K2, value: V) {
        let idx = self.entries.len() as u32;
        self.entries.push(value);
        self.by_first
            .entry(k1.clone())
            .or_default()
            .entry(k2.clone())
            .or_default()
            .push(idx);
        self.by_second
            .entry(k2)
            .or_default()
            .entry(k1)
            .or_default()
            .push(idx);
    }

    /// Values stored at the (k1, k2) pair, in insertion order. Empty when
    /// the pair is absent.
    pub fn get<Q1, Q2>(&self, k1: &Q1, k2: &Q2) -> Vec<&V>
    where
        K1: Borrow<Q1>,
        K2: Borrow<Q2>,
        Q1: Hash + Eq + ?Sized,
        Q2: Hash + Eq + ?Sized,
    {
        self.by_first
            .get(k1)
            .and_then(|slots| slots.get(k2))
            .map(|ids| ids.iter().map(|&i| &self.entries[i as usize]).collect())
            .unwrap_or_default()
    }

    /// Whether any pair with the given first key exists.
    pub fn contains<Q1>(&self, k1: &Q1) -> bool
    where
        K1: Borrow<Q1>,
        Q1: Hash + Eq + ?Sized,
    {
        self.by_first.contains_key(k1)
    }

    /// Whether any pair with the given second key exists.
    pub fn contains_second<Q2>(&self, k2: &Q2) -> bool
    where
        K2: Borrow<Q2>,
        Q2: Hash + Eq + ?Sized,
    {
        self.by_second.contains_key(k2)
    }

    /// Whether the (k1, k2) pair holds at least one value.
    pub fn contains_pair<Q1, Q2>(&self, k1: &Q1, k2: &Q2) -> bool
    where
        K1: Borrow<Q1>,
        K2: Borrow<Q2>,
        Q1: Hash + Eq + ?Sized,
        Q2: Hash + Eq + ?Sized,
    {
        self.by_first
            .get(k1)
            .is_some_and(|slots| slots.contains_key(k2))
    }

    /// All distinct first keys.
    pub fn first_keys(&self) -> impl Iterator<Item = &K1> {
        self.by_first.keys()
    }

    /// All distinct second keys.
    pub fn second_keys(&self) -> impl Iterator<Item = &K2> {
        self.by_second.keys()
    }

    /// The second keys paired with the given first key.
    pub fn second_keys_of<Q1>(&self, k1: &Q1) -> impl Iterator<Item = &K2>
    where
        K1: Borrow<Q1>,
        Q1: Hash + Eq + ?Sized,
    {
        self.by_first.get(k1).into_iter().flat_map(|slots| slots.keys())
    }

    /// The first keys paired with the given second key.
    pub fn first_keys_of<Q2>(&self, k2: &Q2) -> impl Iterator<Item = &K1>
    where
        K2: Borrow<Q2>,
        Q2: Hash + Eq + ?Sized,
    {
        self.by_second.get(k2).into_iter().flat_map(|slots| slots.keys())
    }

    /// Total number of values stored under any pair with the given first
    /// key (summed across second keys, not a distinct-key count).
    pub fn entry_count<Q1>(&self, k1: &Q1) -> usize
    where
        K1: Borrow<Q1>,
        Q1: Hash + Eq + ?Sized,
    {
        self.by_first
            .get(k1)
            .map(|slots| slots.values().map(Vec::len).sum::<usize>())
            .unwrap_or(0)
    }

    /// Total number of values stored under any pair with the given second
    /// key.
    pub fn entry_count_second<Q2>(&self, k2: &Q2) -> usize
    where
        K2: Borrow<Q2>,
        Q2: Hash + Eq + ?Sized,
    {
        self.by_second
            .get(k2)
            .map(|slots| slots.values().map(Vec::len).sum::<usize>())
            .unwrap_or(0)
    }

    /// Number of distinct first keys.
    pub fn key_count(&self) -> usize {
        self.by_first.len()
    }

    /// Number of distinct second keys.
    pub fn second_key_count(&self) -> usize {
        self.by_second.len()
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the multimap holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K1, K2, V> Default for BiMultimap<K1, K2, V>
where
    K1: Eq + Hash + Clone,
    K2: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BiMultimap<String, u32, &'static str> {
        let mut table = BiMultimap::new();
        table.add("alpha".to_string(), 1, "a1");
        table.add("alpha".to_string(), 2, "a2");
        table.add("alpha".to_string(), 2, "a2bis");
        table.add("beta".to_string(), 1, "b1");
        table
    }

    #[test]
    fn test_add_and_get() {
        let table = sample();

        assert_eq!(table.get("alpha", &1), vec![&"a1"]);
        assert_eq!(table.get("alpha", &2), vec![&"a2", &"a2bis"]);
        assert!(table.get("gamma", &1).is_empty());
        assert!(table.get("alpha", &9).is_empty());
    }

    #[test]
    fn test_contains() {
        let table = sample();

        assert!(table.contains("alpha"));
        assert!(!table.contains("gamma"));
        assert!(table.contains_second(&2));
        assert!(!table.contains_second(&9));
        assert!(table.contains_pair("beta", &1));
        assert!(!table.contains_pair("beta", &2));
    }

    #[test]
    fn test_counts() {
        let table = sample();

        assert_eq!(table.key_count(), 2);
        assert_eq!(table.second_key_count(), 2);
        assert_eq!(table.len(), 4);
        assert_eq!(table.entry_count("alpha"), 3);
        assert_eq!(table.entry_count("beta"), 1);
        assert_eq!(table.entry_count("gamma"), 0);
        assert_eq!(table.entry_count_second(&1), 2);
        assert_eq!(table.entry_count_second(&2), 2);
    }

    #[test]
    fn test_bidirectional_consistency() {
        let table = sample();

        for name in table.first_keys() {
            for id in table.second_keys_of(name.as_str()) {
                assert!(table.first_keys_of(id).any(|n| n == name));
            }
        }
        for id in table.second_keys() {
            for name in table.first_keys_of(id) {
                assert!(table.second_keys_of(name.as_str()).any(|i| i == id));
            }
        }
    }

    #[test]
    fn test_deep_copy() {
        let table = sample();
        let mut copy = table.clone();
        copy.add("gamma".to_string(), 3, "g3");

        assert!(copy.contains("gamma"));
        assert!(!table.contains("gamma"));
        assert_eq!(table.len(), 4);
        assert_eq!(copy.len(), 5);
    }
}
