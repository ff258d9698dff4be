//! Sorted properties container.
//!
//! Backs the `<properties>` section of a descriptor. Entries are kept in a
//! `BTreeMap`, so iteration and serialization always run in ascending key
//! order no matter how the entries were inserted.

use std::collections::{BTreeMap, HashMap, btree_map};

use serde::{Deserialize, Serialize};

/// String key/value pairs iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedProperties {
    entries: BTreeMap<String, String>,
}

impl SortedProperties {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in ascending key order.
    ///
    /// Every call starts over from the current contents.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Borrowing iterator over [`SortedProperties`], in ascending key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SortedProperties {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SortedProperties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SortedProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        properties.extend(iter);
        properties
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SortedProperties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, String, S>> for SortedProperties {
    fn from(map: HashMap<String, String, S>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for SortedProperties {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn iterates_in_ascending_key_order() {
        let mut properties = SortedProperties::new();
        properties.insert("c", "three");
        properties.insert("a", "one");
        properties.insert("b", "two");

        let entries: Vec<_> = properties.iter().collect();
        assert_eq!(entries, vec![("a", "one"), ("b", "two"), ("c", "three")]);
    }

    #[test]
    fn reinsert_keeps_single_entry_with_latest_value() {
        let mut properties = SortedProperties::new();
        properties.insert("b", "first");
        properties.insert("a", "one");
        let previous = properties.insert("b", "second");

        assert_eq!(previous.as_deref(), Some("first"));
        assert_eq!(properties.len(), 2);
        assert_eq!(properties.get("b"), Some("second"));
        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let properties: SortedProperties = [("y", "2"), ("x", "1")].into_iter().collect();

        let first: Vec<_> = properties.iter().collect();
        let second: Vec<_> = properties.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn orders_by_byte_value_not_locale() {
        let properties: SortedProperties = [("b", ""), ("B", ""), ("a.z", ""), ("a", "")]
            .into_iter()
            .collect();

        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["B", "a", "a.z", "b"]);
    }

    #[test]
    fn copies_unordered_map_into_sorted_storage() {
        let mut map = HashMap::new();
        map.insert("zebra".to_string(), "1".to_string());
        map.insert("apple".to_string(), "2".to_string());
        map.insert("mango".to_string(), "3".to_string());

        let properties = SortedProperties::from(map);
        assert_eq!(
            properties.keys().collect::<Vec<_>>(),
            vec!["apple", "mango", "zebra"]
        );
    }

    #[test]
    fn remove_and_contains() {
        let mut properties: SortedProperties = [("k", "v")].into_iter().collect();
        assert!(properties.contains_key("k"));
        assert_eq!(properties.remove("k").as_deref(), Some("v"));
        assert!(properties.is_empty());
        assert_eq!(properties.remove("k"), None);
    }

    proptest! {
        #[test]
        fn any_insertion_order_iterates_strictly_ascending(
            entries in proptest::collection::vec(("[a-z.]{1,8}", "[a-z0-9]{0,4}"), 0..32)
        ) {
            let mut properties = SortedProperties::new();
            for (key, value) in &entries {
                properties.insert(key.as_str(), value.as_str());
            }

            let keys: Vec<&str> = properties.keys().collect();
            prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

            // last write wins
            for (key, _) in &entries {
                let latest = entries.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
                prop_assert_eq!(properties.get(key), latest);
            }
        }
    }
}
