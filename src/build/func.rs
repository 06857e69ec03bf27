use crate::{Pull, Source, error::BoxError};

/// Source backed by an iterator. Created with [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

impl<I> Source<I::Item> for FromIter<I>
where
    I: Iterator,
{
    fn advance(&mut self) -> Result<Pull<I::Item>, BoxError> {
        Ok(self.0.next().into())
    }
}

/// Create a source from anything iterable.
///
/// ```rust
/// use selector::prelude::*;
///
/// let mut source = from_iter(vec!["a", "b"]);
/// assert_eq!(source.advance().unwrap(), Pull::Produced("a"));
/// assert_eq!(source.advance().unwrap(), Pull::Produced("b"));
/// assert_eq!(source.advance().unwrap(), Pull::Exhausted);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iter.into_iter())
}

/// Source backed by an iterator of results. Created with [`try_from_iter`].
#[derive(Debug, Clone)]
pub struct TryFromIter<I>(I);

impl<T, E, I> Source<T> for TryFromIter<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        match self.0.next() {
            Some(Ok(value)) => Ok(Pull::Produced(value)),
            Some(Err(err)) => Err(err.into()),
            None => Ok(Pull::Exhausted),
        }
    }
}

/// Create a source from an iterator of results. Each `Err` item surfaces as a fault on
/// the advance that pulled it; the iterator keeps going afterwards.
///
/// ```rust
/// use selector::prelude::*;
///
/// let mut source = try_from_iter(vec![Ok(1), Err("boom"), Ok(3)]);
/// assert_eq!(source.advance().unwrap(), Pull::Produced(1));
/// assert!(source.advance().is_err());
/// assert_eq!(source.advance().unwrap(), Pull::Produced(3));
/// ```
pub fn try_from_iter<I>(iter: I) -> TryFromIter<I::IntoIter>
where
    I: IntoIterator,
{
    TryFromIter(iter.into_iter())
}

/// Source driven by a closure. Created with [`from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Source<T> for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        Ok((self.0)())
    }
}

/// Create a source from a closure returning [`Pull`].
///
/// ```rust
/// use selector::prelude::*;
///
/// let mut left = 2;
/// let mut countdown = from_fn(move || {
///     if left == 0 {
///         return Pull::Exhausted;
///     }
///     left -= 1;
///     Pull::Produced(left)
/// });
/// assert_eq!(countdown.advance().unwrap(), Pull::Produced(1));
/// assert_eq!(countdown.advance().unwrap(), Pull::Produced(0));
/// assert_eq!(countdown.advance().unwrap(), Pull::Exhausted);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Fallible closure source. Created with [`try_from_fn`].
pub struct TryFromFn<F>(F);

impl<T, E, F> Source<T> for TryFromFn<F>
where
    F: FnMut() -> Result<Pull<T>, E>,
    E: Into<BoxError>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        (self.0)().map_err(Into::into)
    }
}

/// Create a source from a closure that may fail.
pub fn try_from_fn<F>(f: F) -> TryFromFn<F> {
    TryFromFn(f)
}

/// Produces a value from a closure on every advance and never runs out.
pub struct RepeatWith<F>(F);

impl<T, F> Source<T> for RepeatWith<F>
where
    F: FnMut() -> T,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        Ok(Pull::Produced((self.0)()))
    }
}

/// Create an endless source.
///
/// ```rust
/// use selector::prelude::*;
///
/// let mut ticks = repeat_with(|| "tick");
/// assert_eq!(ticks.advance().unwrap(), Pull::Produced("tick"));
/// assert_eq!(ticks.advance().unwrap(), Pull::Produced("tick"));
/// // Continues forever...
/// ```
pub fn repeat_with<T, F: FnMut() -> T>(f: F) -> RepeatWith<F> {
    RepeatWith(f)
}
