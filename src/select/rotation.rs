use std::fmt;

use crate::{
    Condition, Pull, SequencePool, Source,
    error::{Error, Result},
};

/// The selection state machine shared by [`Multiplexer`](super::Multiplexer) and
/// [`LabeledMultiplexer`](super::LabeledMultiplexer).
///
/// Invariant: `cursor < pool.len()` whenever the pool is non-empty, `cursor == 0`
/// otherwise.
pub(crate) struct Rotation<'a, T, L> {
    pub(crate) pool: SequencePool<'a, T, L>,
    stop: Condition<'a, T>,
    pause: Condition<'a, T>,
    cursor: usize,
    terminated: bool,
}

impl<'a, T, L> Rotation<'a, T, L> {
    pub(crate) fn new(
        stop: Condition<'a, T>,
        pause: Condition<'a, T>,
        pool: SequencePool<'a, T, L>,
    ) -> Self {
        Rotation {
            pool,
            stop,
            pause,
            cursor: 0,
            terminated: false,
        }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Rotate until some source yields a value that is neither stopped nor paused.
    ///
    /// Returns the position that produced it alongside the value; the entry at that
    /// position is still in the pool when this returns. Faults leave pool and cursor
    /// as they were before the faulting advance.
    pub(crate) fn next_entry(&mut self) -> Result<Option<(&L, T)>> {
        loop {
            if self.terminated {
                return Ok(None);
            }
            if self.pool.is_empty() {
                tracing::debug!("all sources retired, selection finished");
                self.terminated = true;
                return Ok(None);
            }

            let index = self.cursor;
            let value = match self
                .pool
                .advance(index)
                .map_err(|source| Error::Source { index, source })?
            {
                Pull::Produced(value) => value,
                Pull::Exhausted => {
                    tracing::trace!(index, "source exhausted");
                    self.retire(index);
                    continue;
                }
            };

            if self
                .stop
                .check(&value)
                .map_err(|source| Error::Stop { index, source })?
            {
                tracing::trace!(index, "stop condition met, retiring source");
                self.retire(index);
                continue;
            }

            let paused = self
                .pause
                .check(&value)
                .map_err(|source| Error::Pause { index, source })?;
            self.cursor = (index + 1) % self.pool.len();
            if paused {
                tracing::trace!(index, "pause condition met, skipping value");
                continue;
            }

            return Ok(Some((self.pool.label_at(index), value)));
        }
    }

    /// Remove the entry at `index`, keeping the cursor on the same logical member.
    ///
    /// Removing the entry under the cursor leaves the numeric cursor in place, which
    /// now points at its successor; if it was the last entry the cursor wraps to `0`.
    pub(crate) fn retire(&mut self, index: usize) -> Option<Box<dyn Source<T> + 'a>> {
        let removed = self.pool.remove(index)?;
        if index < self.cursor {
            self.cursor -= 1;
        } else if self.cursor >= self.pool.len() {
            self.cursor = 0;
        }
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.pool.clear();
        self.cursor = 0;
    }
}

impl<T, L> fmt::Debug for Rotation<'_, T, L>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotation")
            .field("stop", &self.stop)
            .field("pause", &self.pause)
            .field("cursor", &self.cursor)
            .field("terminated", &self.terminated)
            .field("pool", &self.pool)
            .finish()
    }
}
