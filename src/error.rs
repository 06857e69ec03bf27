use thiserror::Error;

/// Boxed error produced by a faulting source or condition.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Faults surfaced from a single pull.
///
/// Every variant carries the pool position that was being advanced. The pool and the
/// rotation cursor are left as they were before the faulting step, so the caller can
/// pull again, remove the entry at [`Error::index`], or give up.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source at position {index} failed to advance")]
    Source {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("stop condition failed on a value from position {index}")]
    Stop {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("pause condition failed on a value from position {index}")]
    Pause {
        index: usize,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Pool position of the entry that was being advanced when the fault occurred.
    pub fn index(&self) -> usize {
        match self {
            Error::Source { index, .. }
            | Error::Stop { index, .. }
            | Error::Pause { index, .. } => *index,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
