use std::{fmt, iter::FusedIterator};

use super::{factory_name, rotation::Rotation};
use crate::{
    Builder, Condition, Pull, SequencePool, Source,
    error::{BoxError, Result},
};

/// Round-robin selection over a pool of sources, filtered by a stop and a pause
/// condition.
///
/// Each pull advances the source under the cursor by one step:
/// - an exhausted source is removed and the pull moves on to its successor
/// - a value matching the stop condition is discarded and its source removed
/// - a value matching the pause condition is discarded and the cursor moves on
/// - any other value is yielded and the cursor moves on
///
/// ```rust
/// use selector::prelude::*;
///
/// let mut mux = Multiplexer::new(
///     |v: &i32| *v > 10,
///     |v: &i32| v % 2 == 0,
///     [from_iter(vec![0, 2, 4, 6, 8, 10, 12]), from_iter(vec![5, 7, 9, 11])],
/// );
/// let values: Vec<i32> = mux.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(values, vec![5, 7, 9]);
/// assert!(mux.is_empty());
/// ```
pub struct Multiplexer<'a, T> {
    rotation: Rotation<'a, T, ()>,
}

impl<'a, T: 'a> Multiplexer<'a, T> {
    /// Create a multiplexer over `sources` with infallible stop and pause predicates.
    ///
    /// Use [`never_stop`](crate::never_stop) and [`never_pause`](crate::never_pause) for
    /// either predicate to disable it.
    pub fn new<F, G, I, S>(stop: F, pause: G, sources: I) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
        G: FnMut(&T) -> bool + 'a,
        I: IntoIterator<Item = S>,
        S: Source<T> + 'a,
    {
        let mut mux = Multiplexer::with_conditions(Condition::new(stop), Condition::new(pause));
        mux.register_many(sources);
        mux
    }

    /// Create an empty multiplexer from prepared conditions.
    pub fn with_conditions(stop: Condition<'a, T>, pause: Condition<'a, T>) -> Self {
        Multiplexer::from_pool(stop, pause, SequencePool::new())
    }

    pub(crate) fn from_pool(
        stop: Condition<'a, T>,
        pause: Condition<'a, T>,
        pool: SequencePool<'a, T>,
    ) -> Self {
        Multiplexer {
            rotation: Rotation::new(stop, pause, pool),
        }
    }

    /// Start configuring a multiplexer.
    pub fn builder() -> Builder<'a, T> {
        Builder::new()
    }

    /// Add a source at the end of rotation order.
    ///
    /// Sources can be registered at any time, including between pulls; they are reached
    /// once the rotation comes around to them.
    pub fn register<S>(&mut self, source: S) -> &mut Self
    where
        S: Source<T> + 'a,
    {
        self.rotation.pool.add(source, ());
        self
    }

    /// Add several sources, in iteration order.
    pub fn register_many<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Source<T> + 'a,
    {
        self.rotation
            .pool
            .add_many(sources.into_iter().map(|source| ((), source)));
        self
    }

    /// Call `factory` once, register the source it returns, and hand `factory` back.
    ///
    /// The factory's type name is kept as the entry's [`name`](Self::name).
    ///
    /// ```rust
    /// use selector::prelude::*;
    ///
    /// fn evens() -> FromIter<std::iter::StepBy<std::ops::Range<u32>>> {
    ///     from_iter((0..10).step_by(2))
    /// }
    ///
    /// let mut mux = Multiplexer::default();
    /// let evens = mux.register_with(evens);
    /// assert!(mux.name(0).unwrap().ends_with("evens"));
    ///
    /// // The factory is still usable on its own.
    /// assert_eq!(evens().advance().unwrap(), Pull::Produced(0));
    /// ```
    pub fn register_with<F, S>(&mut self, mut factory: F) -> F
    where
        F: FnMut() -> S,
        S: Source<T> + 'a,
    {
        self.rotation
            .pool
            .add_named(factory(), (), factory_name::<F>());
        factory
    }

    /// Pull the next value that passes both conditions.
    ///
    /// Returns `Ok(None)` once every source has been retired; from then on every call
    /// returns `Ok(None)`, even if sources are registered afterwards. A fault leaves
    /// the pool and cursor untouched, so calling again retries the same source.
    pub fn next_value(&mut self) -> Result<Option<T>> {
        Ok(self.rotation.next_entry()?.map(|((), value)| value))
    }

    /// Remove the source at `index` from rotation and return it.
    ///
    /// The cursor keeps pointing at the same member when an earlier entry is removed.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Source<T> + 'a>> {
        let removed = self.rotation.retire(index);
        if removed.is_some() {
            tracing::debug!(index, "source removed by caller");
        }
        removed
    }

    /// Drop every registered source.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.len(), "clearing multiplexer");
        self.rotation.clear();
    }

    /// Number of active sources.
    pub fn len(&self) -> usize {
        self.rotation.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotation.pool.is_empty()
    }

    /// Position of the source the next pull advances first.
    pub fn cursor(&self) -> usize {
        self.rotation.cursor()
    }

    /// Whether a pull already reported the end of the selection.
    pub fn is_terminated(&self) -> bool {
        self.rotation.is_terminated()
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.rotation.pool.name(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Source<T> + 'a)> {
        self.rotation.pool.get_mut(index)
    }

    pub fn pool(&self) -> &SequencePool<'a, T> {
        &self.rotation.pool
    }
}

impl<'a, T: 'a> Default for Multiplexer<'a, T> {
    fn default() -> Self {
        Multiplexer::with_conditions(Condition::never(), Condition::never())
    }
}

impl<'a, T: 'a> Iterator for Multiplexer<'a, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().transpose()
    }
}

impl<'a, T: 'a> FusedIterator for Multiplexer<'a, T> {}

/// A multiplexer can itself be a member of another multiplexer.
impl<'a, T: 'a> Source<T> for Multiplexer<'a, T> {
    fn advance(&mut self) -> std::result::Result<Pull<T>, BoxError> {
        self.next_value().map(Pull::from).map_err(Into::into)
    }
}

impl<T> fmt::Debug for Multiplexer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multiplexer")
            .field("rotation", &self.rotation)
            .finish()
    }
}
