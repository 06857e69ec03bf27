//! Configuration for multiplexers.
//!
//! [`Builder`] collects the stop and pause conditions and the initial sources, then
//! produces a [`Multiplexer`] (via [`build`](Builder::build)) or a
//! [`LabeledMultiplexer`] (via [`build_labeled`](Builder::build_labeled)). Conditions
//! that are never set default to [`Condition::never`].
//!
//! ```rust
//! use selector::prelude::*;
//!
//! let mut mux = Multiplexer::builder()
//!     .stop_when(|v: &u32| *v >= 3)
//!     .source(from_iter(0..10))
//!     .source(from_iter(100..101))
//!     .build();
//! let values: Vec<u32> = mux.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(values, vec![0, 1, 2]);
//! ```

use crate::{
    Condition, LabeledMultiplexer, Multiplexer, SequencePool, Source, error::BoxError,
};

/// Builder for [`Multiplexer`] and [`LabeledMultiplexer`].
#[derive(Debug)]
pub struct Builder<'a, T, L = ()> {
    stop: Condition<'a, T>,
    pause: Condition<'a, T>,
    pool: SequencePool<'a, T, L>,
}

impl<'a, T: 'a, L> Builder<'a, T, L> {
    pub fn new() -> Self {
        Builder {
            stop: Condition::never(),
            pause: Condition::never(),
            pool: SequencePool::new(),
        }
    }

    /// Retire a source as soon as it produces a value matching `f`.
    pub fn stop_when<F>(mut self, f: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        self.stop = Condition::new(f);
        self
    }

    /// Like [`stop_when`](Self::stop_when), with a predicate that can fail.
    pub fn try_stop_when<F, E>(mut self, f: F) -> Self
    where
        F: FnMut(&T) -> Result<bool, E> + 'a,
        E: Into<BoxError>,
    {
        self.stop = Condition::fallible(f);
        self
    }

    /// Skip values matching `f` and move on to the next source.
    pub fn pause_when<F>(mut self, f: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        self.pause = Condition::new(f);
        self
    }

    pub fn try_pause_when<F, E>(mut self, f: F) -> Self
    where
        F: FnMut(&T) -> Result<bool, E> + 'a,
        E: Into<BoxError>,
    {
        self.pause = Condition::fallible(f);
        self
    }

    pub fn labeled_source<S>(mut self, label: L, source: S) -> Self
    where
        S: Source<T> + 'a,
    {
        self.pool.add(source, label);
        self
    }

    pub fn labeled_sources<M, S>(mut self, mapping: M) -> Self
    where
        M: IntoIterator<Item = (L, S)>,
        S: Source<T> + 'a,
    {
        self.pool.add_many(mapping);
        self
    }

    pub fn build_labeled(self) -> LabeledMultiplexer<'a, L, T> {
        LabeledMultiplexer::from_pool(self.stop, self.pause, self.pool)
    }
}

impl<'a, T: 'a> Builder<'a, T, ()> {
    pub fn source<S>(mut self, source: S) -> Self
    where
        S: Source<T> + 'a,
    {
        self.pool.add(source, ());
        self
    }

    pub fn sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Source<T> + 'a,
    {
        self.pool
            .add_many(sources.into_iter().map(|source| ((), source)));
        self
    }

    pub fn build(self) -> Multiplexer<'a, T> {
        Multiplexer::from_pool(self.stop, self.pause, self.pool)
    }
}

impl<'a, T: 'a, L> Default for Builder<'a, T, L> {
    fn default() -> Self {
        Builder::new()
    }
}
