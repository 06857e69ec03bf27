use std::{fmt, iter::FusedIterator};

use super::{factory_name, rotation::Rotation};
use crate::{
    Builder, Condition, Pull, SequencePool, Source,
    error::{BoxError, Result},
    iter::Pairs,
};

/// A [`Multiplexer`](crate::Multiplexer) whose sources carry labels; values come out
/// as `(label, value)` pairs.
///
/// Rotation, stop and pause behave exactly as in the unlabeled variant. Labels are
/// cloned into every pair.
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use selector::prelude::*;
///
/// let mut mux = LabeledMultiplexer::new(
///     never_stop,
///     never_pause,
///     BTreeMap::from([("a", from_iter(vec![1, 2])), ("b", from_iter(vec![3, 4]))]),
/// );
/// let pairs: Vec<(&str, i32)> = mux.pairs().collect::<Result<_, _>>().unwrap();
/// assert_eq!(pairs, vec![("a", 1), ("b", 3), ("a", 2), ("b", 4)]);
/// ```
pub struct LabeledMultiplexer<'a, L, T> {
    rotation: Rotation<'a, T, L>,
}

impl<'a, L, T: 'a> LabeledMultiplexer<'a, L, T> {
    /// Create a multiplexer over a `label -> source` mapping.
    ///
    /// Sources join the rotation in the mapping's iteration order; pass a `BTreeMap` or
    /// a `Vec` of pairs when that order matters.
    pub fn new<F, G, M, S>(stop: F, pause: G, mapping: M) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
        G: FnMut(&T) -> bool + 'a,
        M: IntoIterator<Item = (L, S)>,
        S: Source<T> + 'a,
    {
        let mut mux =
            LabeledMultiplexer::with_conditions(Condition::new(stop), Condition::new(pause));
        mux.register_many(mapping);
        mux
    }

    pub fn with_conditions(stop: Condition<'a, T>, pause: Condition<'a, T>) -> Self {
        LabeledMultiplexer::from_pool(stop, pause, SequencePool::new())
    }

    pub(crate) fn from_pool(
        stop: Condition<'a, T>,
        pause: Condition<'a, T>,
        pool: SequencePool<'a, T, L>,
    ) -> Self {
        LabeledMultiplexer {
            rotation: Rotation::new(stop, pause, pool),
        }
    }

    /// Start configuring a labeled multiplexer.
    pub fn builder() -> Builder<'a, T, L> {
        Builder::new()
    }

    /// Add a labeled source at the end of rotation order.
    ///
    /// Labels are not required to be unique; lookups by label find the first match.
    pub fn register<S>(&mut self, label: L, source: S) -> &mut Self
    where
        S: Source<T> + 'a,
    {
        self.rotation.pool.add(source, label);
        self
    }

    /// Add every `(label, source)` pair of `mapping`, in its iteration order.
    pub fn register_many<M, S>(&mut self, mapping: M) -> &mut Self
    where
        M: IntoIterator<Item = (L, S)>,
        S: Source<T> + 'a,
    {
        self.rotation.pool.add_many(mapping);
        self
    }

    /// Call `factory` once, register its source under `label`, and hand `factory` back.
    pub fn register_with<F, S>(&mut self, label: L, mut factory: F) -> F
    where
        F: FnMut() -> S,
        S: Source<T> + 'a,
    {
        self.rotation
            .pool
            .add_named(factory(), label, factory_name::<F>());
        factory
    }

    /// Pull the next labeled value that passes both conditions.
    ///
    /// Same termination and fault semantics as
    /// [`Multiplexer::next_value`](crate::Multiplexer::next_value).
    pub fn next_pair(&mut self) -> Result<Option<(L, T)>>
    where
        L: Clone,
    {
        Ok(self
            .rotation
            .next_entry()?
            .map(|(label, value)| (label.clone(), value)))
    }

    /// Iterate over `(label, value)` pairs without consuming the multiplexer.
    pub fn pairs(&mut self) -> Pairs<'_, 'a, L, T>
    where
        L: Clone,
    {
        Pairs::new(self)
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Source<T> + 'a>> {
        let removed = self.rotation.retire(index);
        if removed.is_some() {
            tracing::debug!(index, "source removed by caller");
        }
        removed
    }

    /// Remove the first source registered under `label`.
    pub fn remove_label(&mut self, label: &L) -> Option<Box<dyn Source<T> + 'a>>
    where
        L: PartialEq,
    {
        let index = self.rotation.pool.position(label)?;
        self.remove(index)
    }

    /// Drop every registered source.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.len(), "clearing labeled multiplexer");
        self.rotation.clear();
    }

    pub fn len(&self) -> usize {
        self.rotation.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotation.pool.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.rotation.cursor()
    }

    pub fn is_terminated(&self) -> bool {
        self.rotation.is_terminated()
    }

    pub fn label(&self, index: usize) -> Option<&L> {
        self.rotation.pool.label(index)
    }

    /// Labels of the active sources, in rotation order.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.rotation.pool.labels()
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.rotation.pool.name(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Source<T> + 'a)> {
        self.rotation.pool.get_mut(index)
    }

    /// The first source registered under `label`.
    pub fn get_by_label(&mut self, label: &L) -> Option<&mut (dyn Source<T> + 'a)>
    where
        L: PartialEq,
    {
        let index = self.rotation.pool.position(label)?;
        self.rotation.pool.get_mut(index)
    }

    pub fn pool(&self) -> &SequencePool<'a, T, L> {
        &self.rotation.pool
    }
}

impl<'a, L, T: 'a> Default for LabeledMultiplexer<'a, L, T> {
    fn default() -> Self {
        LabeledMultiplexer::with_conditions(Condition::never(), Condition::never())
    }
}

impl<'a, L, T: 'a> Iterator for LabeledMultiplexer<'a, L, T>
where
    L: Clone,
{
    type Item = Result<(L, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

impl<'a, L: Clone, T: 'a> FusedIterator for LabeledMultiplexer<'a, L, T> {}

impl<'a, L, T: 'a> Source<(L, T)> for LabeledMultiplexer<'a, L, T>
where
    L: Clone,
{
    fn advance(&mut self) -> std::result::Result<Pull<(L, T)>, BoxError> {
        self.next_pair().map(Pull::from).map_err(Into::into)
    }
}

impl<L, T> fmt::Debug for LabeledMultiplexer<'_, L, T>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledMultiplexer")
            .field("rotation", &self.rotation)
            .finish()
    }
}
