//! Insertion-ordered set
//!
//! Backs both the member list of a packaging unit and the engine's pending
//! registry. Membership tests are O(1); removal keeps the relative order of
//! the surviving entries.

use std::hash::Hash;

use indexmap::IndexSet;

/// Decision returned by an [`OrderedSet::for_each`] visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep the current element
    Keep,
    /// Remove the current element; iteration continues with the next one
    Remove,
}

/// A deduplicating set that iterates in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T: Hash + Eq> {
    entries: IndexSet<T>,
}

impl<T: Hash + Eq> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexSet::new(),
        }
    }

    /// Insert `value` at the end unless it is already present.
    ///
    /// Returns `true` if the value was newly inserted. An existing value keeps
    /// its original position.
    pub fn add(&mut self, value: T) -> bool {
        self.entries.insert(value)
    }

    /// Remove `value` if present, preserving the order of the others.
    pub fn remove(&mut self, value: &T) -> bool {
        self.entries.shift_remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.entries.iter()
    }

    /// Call `visitor` once per element in insertion order.
    ///
    /// The visitor may ask for the current element to be removed. Removal
    /// happens in place without skipping or repeating any element.
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&T) -> Visit,
    {
        self.entries.retain(|value| visitor(value) == Visit::Keep);
    }
}

impl<T: Hash + Eq + Clone> OrderedSet<T> {
    /// Snapshot of the current contents in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Hash + Eq> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[&str]) -> OrderedSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn add_keeps_first_insertion_order() {
        let mut set = OrderedSet::new();
        set.add("b");
        set.add("a");
        set.add("c");
        assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn add_existing_is_noop() {
        let mut set = set_of(&["a", "b", "c"]);
        assert!(!set.add("a".to_string()));
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_preserves_order_of_survivors() {
        let mut set = set_of(&["a", "b", "c", "d"]);
        assert!(set.remove(&"b".to_string()));
        assert_eq!(set.to_vec(), vec!["a", "c", "d"]);
        assert!(!set.contains(&"b".to_string()));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set = set_of(&["a", "b"]);
        assert!(!set.remove(&"z".to_string()));
        assert_eq!(set.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn re_adding_removed_value_appends_it() {
        let mut set = set_of(&["a", "b", "c"]);
        set.remove(&"a".to_string());
        set.add("a".to_string());
        assert_eq!(set.to_vec(), vec!["b", "c", "a"]);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut set = set_of(&["a", "b"]);
        let snapshot = set.to_vec();
        set.add("c".to_string());
        set.remove(&"a".to_string());
        assert_eq!(snapshot, vec!["a", "b"]);
    }

    #[test]
    fn for_each_visits_in_order_and_removes_on_request() {
        let mut set = set_of(&["a", "b", "c", "d"]);
        let mut seen = Vec::new();
        set.for_each(|v| {
            seen.push(v.clone());
            if v == "b" || v == "c" {
                Visit::Remove
            } else {
                Visit::Keep
            }
        });
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(set.to_vec(), vec!["a", "d"]);
    }

    #[test]
    fn for_each_can_remove_everything() {
        let mut set = set_of(&["a", "b"]);
        set.for_each(|_| Visit::Remove);
        assert!(set.is_empty());
    }
}
