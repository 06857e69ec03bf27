//! Commonly used imports
//!
//! Use `use selector::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Condition, LabeledMultiplexer, Multiplexer, Pull, Source};

// Predefined predicates
pub use crate::{never_pause, never_stop};

// Source constructors
pub use crate::build::{
    FromFn, FromIter, RepeatWith, TryFromFn, TryFromIter, from_fn, from_iter, repeat_with,
    try_from_fn, try_from_iter,
};
