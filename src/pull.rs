/// Result of advancing a source by one step: either a fresh value or the end of the source.
///
/// `Pull` plays the role `Option` plays for [`Iterator::next`], but keeps the exhaustion
/// case named so that code matching on it reads as rotation logic rather than as
/// missing-value handling.
///
/// # Examples
///
/// ```rust
/// use selector::Pull;
///
/// let produced: Pull<i32> = Pull::Produced(42);
/// let done: Pull<i32> = Pull::Exhausted;
///
/// assert_eq!(produced.map(|x| x * 2), Pull::Produced(84));
/// assert!(done.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The source produced a value
    Produced(T),
    /// The source has no more values
    Exhausted,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull is `Produced`.
    ///
    /// ```rust
    /// use selector::Pull;
    ///
    /// assert!(Pull::Produced(1).is_produced());
    /// assert!(!Pull::<i32>::Exhausted.is_produced());
    /// ```
    #[inline]
    pub const fn is_produced(&self) -> bool {
        matches!(self, Pull::Produced(_))
    }

    /// Returns `true` if the pull is `Exhausted`.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// Converts from `Pull<T>` to `Option<T>`, discarding the exhaustion signal.
    ///
    /// ```rust
    /// use selector::Pull;
    ///
    /// assert_eq!(Pull::Produced(3).produced(), Some(3));
    /// assert_eq!(Pull::<i32>::Exhausted.produced(), None);
    /// ```
    #[inline]
    pub fn produced(self) -> Option<T> {
        match self {
            Pull::Produced(value) => Some(value),
            Pull::Exhausted => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the produced value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Produced(value) => Pull::Produced(f(value)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Produced(value) => Pull::Produced(value),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Returns the produced value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `Exhausted`.
    ///
    /// ```rust
    /// use selector::Pull;
    ///
    /// assert_eq!(Pull::Produced("value").unwrap_produced(), "value");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_produced(self) -> T {
        match self {
            Pull::Produced(value) => value,
            Pull::Exhausted => panic!("called `Pull::unwrap_produced()` on an `Exhausted` value"),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Pull::Produced(value),
            None => Pull::Exhausted,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(pull: Pull<T>) -> Self {
        pull.produced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversions() {
        assert_eq!(Pull::from(Some(7)), Pull::Produced(7));
        assert_eq!(Pull::<u8>::from(None), Pull::Exhausted);
        assert_eq!(Option::from(Pull::Produced('x')), Some('x'));
        assert_eq!(Option::<char>::from(Pull::Exhausted), None);
    }

    #[test]
    fn test_map_leaves_exhausted_alone() {
        let calls = std::cell::Cell::new(0);
        let done: Pull<i32> = Pull::Exhausted;
        let mapped = done.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(mapped, Pull::Exhausted);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_as_ref() {
        let pull = Pull::Produced(String::from("a"));
        assert_eq!(pull.as_ref().map(|s| s.len()), Pull::Produced(1));
        assert!(pull.is_produced());
    }

    #[test]
    #[should_panic(expected = "on an `Exhausted` value")]
    fn test_unwrap_produced_panics_on_exhausted() {
        Pull::<()>::Exhausted.unwrap_produced();
    }
}
