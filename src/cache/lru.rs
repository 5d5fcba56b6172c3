//! Recency List Module
//!
//! Ordered sequence of entries used to pick eviction victims.

use std::collections::VecDeque;

// == Recency List ==
/// Tracks recency order over comparable entries.
///
/// Entries are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Appending with [`add`](Self::add) places an entry at the back; only
/// [`access`](Self::access) promotes an entry to the front.
#[derive(Debug, Clone)]
pub struct RecencyList<T> {
    /// Entries by recency
    order: VecDeque<T>,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<T: PartialEq> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Appends an entry at the least recently used end.
    ///
    /// No uniqueness check is made; callers keep one slot per entry.
    pub fn add(&mut self, entry: T) {
        self.order.push_back(entry);
    }

    // == Remove ==
    /// Removes every entry equal to `entry`. Absent entries are ignored.
    pub fn remove(&mut self, entry: &T) {
        self.order.retain(|e| e != entry);
    }

    // == Access ==
    /// Moves the first entry equal to `entry` to the front.
    ///
    /// Returns true on a hit, false if no such entry exists.
    pub fn access(&mut self, entry: &T) -> bool {
        let Some(pos) = self.order.iter().position(|e| e == entry) else {
            return false;
        };
        if let Some(found) = self.order.remove(pos) {
            self.order.push_front(found);
        }
        true
    }

    // == Evict ==
    /// Drops entries from the back until at most `target_size` remain.
    ///
    /// Returns the dropped entries, least recently used last.
    pub fn evict(&mut self, target_size: usize) -> Vec<T> {
        if self.order.len() <= target_size {
            return Vec::new();
        }
        self.order.split_off(target_size).into()
    }

    // == Contains ==
    /// Checks if an entry is being tracked.
    pub fn contains(&self, entry: &T) -> bool {
        self.order.contains(entry)
    }

    // == Peek ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_oldest(&self) -> Option<&T> {
        self.order.back()
    }

    /// Returns the most recently used entry.
    pub fn peek_newest(&self) -> Option<&T> {
        self.order.front()
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

impl<'a, T> IntoIterator for &'a RecencyList<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[&'static str]) -> RecencyList<&'static str> {
        let mut list = RecencyList::new();
        for item in items {
            list.add(*item);
        }
        list
    }

    fn contents(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.peek_oldest(), None);
    }

    #[test]
    fn test_add_appends_to_back() {
        let list = list_of(&["a", "b", "c"]);

        assert_eq!(contents(&list), vec!["a", "b", "c"]);
        // 'a' was never displaced, so it stays at the front
        assert_eq!(list.peek_newest(), Some(&"a"));
        assert_eq!(list.peek_oldest(), Some(&"c"));
    }

    #[test]
    fn test_access_moves_to_front() {
        let mut list = list_of(&["a", "b", "c"]);

        assert!(list.access(&"c"));
        assert_eq!(contents(&list), vec!["c", "a", "b"]);

        assert!(list.access(&"b"));
        assert_eq!(contents(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_access_front_entry_keeps_order() {
        let mut list = list_of(&["a", "b"]);

        assert!(list.access(&"a"));
        assert_eq!(contents(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_access_miss() {
        let mut list = list_of(&["a", "b"]);

        assert!(!list.access(&"z"));
        assert_eq!(contents(&list), vec!["a", "b"]);

        let mut empty: RecencyList<&str> = RecencyList::new();
        assert!(!empty.access(&"a"));
    }

    #[test]
    fn test_access_moves_only_first_duplicate() {
        let mut list = list_of(&["a", "b", "a"]);

        assert!(list.access(&"a"));
        assert_eq!(contents(&list), vec!["a", "b", "a"]);

        assert!(list.access(&"b"));
        assert_eq!(contents(&list), vec!["b", "a", "a"]);
    }

    #[test]
    fn test_remove() {
        let mut list = list_of(&["a", "b", "c"]);

        list.remove(&"b");

        assert_eq!(list.len(), 2);
        assert!(!list.contains(&"b"));
        assert!(list.contains(&"a"));
        assert!(list.contains(&"c"));
    }

    #[test]
    fn test_remove_drops_all_matches() {
        let mut list = list_of(&["a", "b", "a"]);

        list.remove(&"a");
        assert_eq!(contents(&list), vec!["b"]);
    }

    #[test]
    fn test_remove_nonexistent_entry() {
        let mut list = list_of(&["a", "b"]);

        // Should not panic or affect existing entries
        list.remove(&"nonexistent");
        assert_eq!(list.len(), 2);

        let mut empty: RecencyList<&str> = RecencyList::new();
        empty.remove(&"a");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_evict_truncates_back() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.access(&"d");

        let dropped = list.evict(2);

        assert_eq!(dropped, vec!["b", "c"]);
        assert_eq!(contents(&list), vec!["d", "a"]);
    }

    #[test]
    fn test_evict_to_zero() {
        let mut list = list_of(&["a", "b"]);

        assert_eq!(list.evict(0), vec!["a", "b"]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_evict_noop_at_or_below_target() {
        let mut list = list_of(&["a", "b", "c"]);

        assert!(list.evict(3).is_empty());
        assert!(list.evict(20).is_empty());
        assert_eq!(contents(&list), vec!["a", "b", "c"]);

        let mut empty: RecencyList<&str> = RecencyList::new();
        assert!(empty.evict(0).is_empty());
    }

    #[test]
    fn test_iter_is_restartable() {
        let list = list_of(&["a", "b"]);

        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = (&list).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear() {
        let mut list = list_of(&["a", "b"]);
        list.clear();
        assert!(list.is_empty());
    }
}
