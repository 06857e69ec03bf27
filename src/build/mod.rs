//! Building sources from iterators and closures
//!
//! Anything that implements [`Source`](crate::Source) can join a multiplexer; these
//! constructors cover the common cases without a hand-written impl.

mod func;

pub use func::{
    FromFn, FromIter, RepeatWith, TryFromFn, TryFromIter, from_fn, from_iter, repeat_with,
    try_from_fn, try_from_iter,
};
