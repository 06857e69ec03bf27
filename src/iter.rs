//! Borrowing iterator over a labeled multiplexer.
//!
//! [`LabeledMultiplexer`] already implements [`Iterator`]; [`Pairs`] is the explicit
//! form returned by [`LabeledMultiplexer::pairs`], handy in `for` loops that need the
//! multiplexer again afterwards (to register more sources, inspect labels, or remove a
//! faulting member).
//!
//! ```rust
//! use selector::prelude::*;
//!
//! let mut mux = LabeledMultiplexer::default();
//! mux.register("left", from_iter([1, 2]));
//! mux.register("right", from_iter([3]));
//!
//! let mut seen = Vec::new();
//! for pair in mux.pairs() {
//!     seen.push(pair.unwrap());
//! }
//! assert_eq!(seen, vec![("left", 1), ("right", 3), ("left", 2)]);
//! assert!(mux.is_terminated());
//! ```

use std::iter::FusedIterator;

use crate::{LabeledMultiplexer, error::Result};

/// Iterator of `(label, value)` pairs borrowed from a [`LabeledMultiplexer`].
pub struct Pairs<'m, 'a, L, T> {
    mux: &'m mut LabeledMultiplexer<'a, L, T>,
}

impl<'m, 'a, L, T> Pairs<'m, 'a, L, T> {
    pub(crate) fn new(mux: &'m mut LabeledMultiplexer<'a, L, T>) -> Self {
        Pairs { mux }
    }
}

impl<'a, L, T: 'a> Iterator for Pairs<'_, 'a, L, T>
where
    L: Clone,
{
    type Item = Result<(L, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.mux.next_pair().transpose()
    }
}

impl<'a, L: Clone, T: 'a> FusedIterator for Pairs<'_, 'a, L, T> {}

#[cfg(test)]
mod tests {
    use crate::{LabeledMultiplexer, build::from_iter};

    #[test]
    fn test_pairs_can_be_resumed() {
        let mut mux = LabeledMultiplexer::default();
        mux.register(0, from_iter(vec!['a', 'b', 'c']));

        let first: Vec<_> = mux.pairs().take(1).map(|p| p.unwrap()).collect();
        assert_eq!(first, vec![(0, 'a')]);

        mux.register(1, from_iter(vec!['z']));
        let rest: Vec<_> = mux.pairs().map(|p| p.unwrap()).collect();
        assert_eq!(rest, vec![(0, 'b'), (1, 'z'), (0, 'c')]);
    }

    #[test]
    fn test_pairs_fused_after_end() {
        let mut mux = LabeledMultiplexer::default();
        mux.register("only", from_iter(Vec::<u8>::new()));
        let mut pairs = mux.pairs();
        assert!(pairs.next().is_none());
        assert!(pairs.next().is_none());
    }
}
