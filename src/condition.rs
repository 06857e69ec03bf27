//! Per-value predicates deciding when a source is stopped or paused.
//!
//! A multiplexer holds exactly one stop condition and one pause condition. Both see
//! every value pulled from any source, in pull order, so a closure capturing mutable
//! state (a "seen" set, a counter) behaves as a stateful predicate.

use std::fmt;

use crate::error::BoxError;

/// Always-false stop predicate: no source is ever retired because of its values.
pub fn never_stop<T>(_: &T) -> bool {
    false
}

/// Always-false pause predicate: every value that survives the stop check is yielded.
pub fn never_pause<T>(_: &T) -> bool {
    false
}

type Check<'a, T> = Box<dyn FnMut(&T) -> Result<bool, BoxError> + 'a>;

/// A boxed, possibly stateful, possibly fallible predicate over pulled values.
///
/// ```rust
/// use selector::Condition;
///
/// let mut seen = std::collections::HashSet::new();
/// let mut repeated = Condition::new(move |v: &i32| !seen.insert(*v));
/// assert!(!repeated.check(&1).unwrap());
/// assert!(repeated.check(&1).unwrap());
/// ```
pub struct Condition<'a, T> {
    check: Check<'a, T>,
}

impl<'a, T> Condition<'a, T> {
    /// Wrap an infallible predicate.
    pub fn new<F>(mut f: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
        T: 'a,
    {
        Condition {
            check: Box::new(move |value: &T| Ok::<_, BoxError>(f(value))),
        }
    }

    /// Wrap a predicate that can fail. A failure aborts the pull that triggered it.
    pub fn fallible<F, E>(mut f: F) -> Self
    where
        F: FnMut(&T) -> Result<bool, E> + 'a,
        E: Into<BoxError>,
        T: 'a,
    {
        Condition {
            check: Box::new(move |value: &T| f(value).map_err(Into::<BoxError>::into)),
        }
    }

    /// The always-false condition.
    pub fn never() -> Self
    where
        T: 'a,
    {
        Condition::new(never_stop)
    }

    /// Evaluate the predicate against `value`.
    pub fn check(&mut self, value: &T) -> Result<bool, BoxError> {
        (self.check)(value)
    }
}

impl<'a, T: 'a> Default for Condition<'a, T> {
    fn default() -> Self {
        Condition::never()
    }
}

impl<T> fmt::Debug for Condition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").finish_non_exhaustive()
    }
}
