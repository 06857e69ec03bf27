//! Ordered pool of active sources.
//!
//! The pool owns every registered source together with its label (`()` when unlabeled)
//! and an optional name used for introspection. Insertion order is rotation order, so
//! removal is always an order-preserving positional delete.

use std::fmt;

use crate::{Pull, Source, error::BoxError};

struct Entry<'a, T, L> {
    source: Box<dyn Source<T> + 'a>,
    label: L,
    name: Option<&'static str>,
}

/// Ordered collection of boxed sources, each carrying a label.
///
/// ```rust
/// use selector::prelude::*;
/// use selector::SequencePool;
///
/// let mut pool: SequencePool<'_, i32, &str> = SequencePool::new();
/// pool.add(from_iter([1]), "one");
/// pool.add(from_iter([2, 3]), "two");
///
/// assert_eq!(pool.advance(1).unwrap(), Pull::Produced(2));
/// assert!(pool.remove(0).is_some());
/// assert_eq!(pool.label(0), Some(&"two"));
/// ```
pub struct SequencePool<'a, T, L = ()> {
    entries: Vec<Entry<'a, T, L>>,
}

impl<'a, T, L> SequencePool<'a, T, L> {
    /// Create an empty pool.
    pub fn new() -> Self {
        SequencePool {
            entries: Vec::new(),
        }
    }

    /// Number of active entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a source at the end of rotation order and return its position.
    ///
    /// The source may already be partially consumed.
    pub fn add<S>(&mut self, source: S, label: L) -> usize
    where
        S: Source<T> + 'a,
    {
        self.push(Box::new(source), label, None)
    }

    /// Like [`add`](Self::add), recording `name` for introspection.
    pub fn add_named<S>(&mut self, source: S, label: L, name: &'static str) -> usize
    where
        S: Source<T> + 'a,
    {
        self.push(Box::new(source), label, Some(name))
    }

    /// Append every `(label, source)` pair, in the iteration order of `pairs`.
    pub fn add_many<I, S>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, S)>,
        S: Source<T> + 'a,
    {
        for (label, source) in pairs {
            self.add(source, label);
        }
    }

    fn push(
        &mut self,
        source: Box<dyn Source<T> + 'a>,
        label: L,
        name: Option<&'static str>,
    ) -> usize {
        self.entries.push(Entry {
            source,
            label,
            name,
        });
        self.entries.len() - 1
    }

    /// Pull the next value from the source at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn advance(&mut self, index: usize) -> Result<Pull<T>, BoxError> {
        self.entries[index].source.advance()
    }

    /// Discard the entry at `index`, shifting every later entry down by one.
    ///
    /// Returns the removed source, or `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Source<T> + 'a>> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).source)
        } else {
            None
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn label(&self, index: usize) -> Option<&L> {
        self.entries.get(index).map(|entry| &entry.label)
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub(crate) fn label_at(&self, index: usize) -> &L {
        &self.entries[index].label
    }

    /// Name recorded when the entry was registered from a factory, if any.
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).and_then(|entry| entry.name)
    }

    /// Mutable access to a member, e.g. to drain or inspect it out of rotation.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Source<T> + 'a)> {
        self.entries.get_mut(index).map(|entry| entry.source.as_mut())
    }

    /// Labels in rotation order.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.entries.iter().map(|entry| &entry.label)
    }

    /// Position of the first entry carrying `label`.
    pub fn position(&self, label: &L) -> Option<usize>
    where
        L: PartialEq,
    {
        self.entries.iter().position(|entry| entry.label == *label)
    }
}

impl<T, L> Default for SequencePool<'_, T, L> {
    fn default() -> Self {
        SequencePool::new()
    }
}

impl<T, L> fmt::Debug for SequencePool<'_, T, L>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| (&entry.label, entry.name)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, try_from_iter};

    fn pool_of(sources: Vec<Vec<i32>>) -> SequencePool<'static, i32, usize> {
        let mut pool = SequencePool::new();
        for (label, values) in sources.into_iter().enumerate() {
            pool.add(from_iter(values), label);
        }
        pool
    }

    #[test]
    fn test_add_returns_positions_in_insertion_order() {
        let mut pool: SequencePool<'_, i32> = SequencePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.add(from_iter(vec![1]), ()), 0);
        assert_eq!(pool.add(from_iter(vec![2]), ()), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_advance_targets_single_entry() {
        let mut pool = pool_of(vec![vec![1, 2], vec![10, 20]]);
        assert_eq!(pool.advance(1).unwrap(), Pull::Produced(10));
        assert_eq!(pool.advance(1).unwrap(), Pull::Produced(20));
        assert_eq!(pool.advance(1).unwrap(), Pull::Exhausted);
        assert_eq!(pool.advance(0).unwrap(), Pull::Produced(1));
    }

    #[test]
    fn test_advance_reports_source_fault() {
        let mut pool: SequencePool<'_, i32> = SequencePool::new();
        pool.add(try_from_iter(vec![Err("offline"), Ok(1)]), ());
        assert_eq!(pool.advance(0).unwrap_err().to_string(), "offline");
        assert_eq!(pool.advance(0).unwrap(), Pull::Produced(1));
    }

    #[test]
    #[should_panic]
    fn test_advance_out_of_range_panics() {
        let mut pool = pool_of(vec![vec![1]]);
        let _ = pool.advance(1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut pool = pool_of(vec![vec![0], vec![1], vec![2], vec![3]]);
        assert!(pool.remove(1).is_some());
        assert_eq!(pool.labels().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(pool.advance(1).unwrap(), Pull::Produced(2));
        assert!(pool.remove(3).is_none());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_removed_source_keeps_remaining_values() {
        let mut pool = pool_of(vec![vec![7, 8, 9]]);
        assert_eq!(pool.advance(0).unwrap(), Pull::Produced(7));
        let mut removed = pool.remove(0).unwrap();
        assert!(pool.is_empty());
        assert_eq!(removed.advance().unwrap(), Pull::Produced(8));
    }

    #[test]
    fn test_add_many_keeps_collection_order() {
        let mut pool: SequencePool<'_, u8, &str> = SequencePool::new();
        let mapping = std::collections::BTreeMap::from([
            ("b", from_iter(vec![2])),
            ("a", from_iter(vec![1])),
        ]);
        pool.add_many(mapping);
        assert_eq!(pool.labels().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(pool.position(&"b"), Some(1));
        assert_eq!(pool.position(&"c"), None);
    }

    #[test]
    fn test_names_and_debug() {
        let mut pool: SequencePool<'_, i32, &str> = SequencePool::new();
        pool.add(from_iter(vec![1]), "plain");
        pool.add_named(from_iter(vec![2]), "named", "numbers");
        assert_eq!(pool.name(0), None);
        assert_eq!(pool.name(1), Some("numbers"));
        assert_eq!(
            format!("{pool:?}"),
            r#"[("plain", None), ("named", Some("numbers"))]"#
        );
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut pool = pool_of(vec![vec![4, 5]]);
        let member = pool.get_mut(0).unwrap();
        assert_eq!(member.advance().unwrap(), Pull::Produced(4));
        assert!(pool.get_mut(1).is_none());
        assert_eq!(pool.advance(0).unwrap(), Pull::Produced(5));
        pool.clear();
        assert!(pool.is_empty());
    }
}
