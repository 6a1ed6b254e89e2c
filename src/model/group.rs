//! Insertion-ordered grouping of values by key

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Outcome of adding a value to a [`GroupTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The value was appended to its key's group
    Appended,
    /// The key already holds the maximum number of values; nothing changed
    Full,
}

/// Ordered mapping from key to the values collected for it.
///
/// Keys keep the position of their first appearance. A key only exists once a
/// value has been appended to it, so no group is ever empty.
#[derive(Debug, Clone)]
pub struct GroupTable {
    groups: IndexMap<String, Vec<String>, FxBuildHasher>,
    max_values: usize,
}

impl GroupTable {
    /// Create an empty table that keeps at most `max_values` values per key
    pub fn new(max_values: usize) -> Self {
        Self {
            groups: IndexMap::default(),
            max_values,
        }
    }

    /// Append `value` to the group for `key`, creating the group if needed
    pub fn insert(&mut self, key: &str, value: &str) -> Insert {
        if let Some(values) = self.groups.get_mut(key) {
            if values.len() >= self.max_values {
                return Insert::Full;
            }
            values.push(value.to_string());
            return Insert::Appended;
        }

        if self.max_values == 0 {
            return Insert::Full;
        }

        self.groups.insert(key.to_string(), vec![value.to_string()]);
        Insert::Appended
    }

    /// Values collected for a key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Groups in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut table = GroupTable::new(10);
        table.insert("k2", "a");
        table.insert("k1", "b");
        table.insert("k2", "c");

        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["k2", "k1"]);
        assert_eq!(table.get("k2"), Some(&["a".to_string(), "c".to_string()][..]));
    }

    #[test]
    fn test_cap_drops_extra_values() {
        let mut table = GroupTable::new(2);
        assert_eq!(table.insert("k", "1"), Insert::Appended);
        assert_eq!(table.insert("k", "2"), Insert::Appended);
        assert_eq!(table.insert("k", "3"), Insert::Full);
        assert_eq!(table.get("k").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_zero_cap_creates_no_group() {
        let mut table = GroupTable::new(0);
        assert_eq!(table.insert("k", "v"), Insert::Full);
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_values_are_kept() {
        let mut table = GroupTable::new(10);
        table.insert("k", "v");
        table.insert("k", "v");
        assert_eq!(table.get("k").map(<[String]>::len), Some(2));
        assert_eq!(table.len(), 1);
    }
}
