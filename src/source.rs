//! Core trait for lazy value sources.
//!
//! This module defines the [`Source`] trait, the one capability a multiplexer needs from
//! each of its members: pull the next value, or report that there are none left.
//!
//! # Examples
//!
//! ```rust
//! use selector::prelude::*;
//!
//! let mut source = from_iter([1, 2]);
//! assert_eq!(source.advance().unwrap(), Pull::Produced(1));
//! assert_eq!(source.advance().unwrap(), Pull::Produced(2));
//! assert_eq!(source.advance().unwrap(), Pull::Exhausted);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{error::BoxError, pull::Pull};

/// A lazy, single-pass producer of values.
///
/// Each call to `advance()` either produces the next value, signals exhaustion, or
/// fails. Exhaustion is terminal: a multiplexer never advances a source again after it
/// returned [`Pull::Exhausted`]. A failure is not terminal; the caller decides whether
/// to try again.
pub trait Source<T> {
    /// Pull the next value.
    fn advance(&mut self) -> Result<Pull<T>, BoxError>;

    fn boxed<'a>(self) -> Box<dyn Source<T> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T, S> Source<T> for Box<S>
where
    S: Source<T> + ?Sized,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        (**self).advance()
    }
}

impl<T, S> Source<T> for &'_ mut S
where
    S: Source<T> + ?Sized,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        (**self).advance()
    }
}

/// Shared sources let the caller keep a handle on a member after registering it.
impl<T, S> Source<T> for Rc<RefCell<S>>
where
    S: Source<T>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        self.borrow_mut().advance()
    }
}

impl<T, S> Source<T> for Option<S>
where
    S: Source<T>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        match self {
            Some(source) => source.advance(),
            None => Ok(Pull::Exhausted),
        }
    }
}

impl<T, L, R> Source<T> for either::Either<L, R>
where
    L: Source<T>,
    R: Source<T>,
{
    fn advance(&mut self) -> Result<Pull<T>, BoxError> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}
