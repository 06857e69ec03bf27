//! # Selector: round-robin selection over lazy sources
//!
//! Pull values from several sources in turn, retiring a source when one of its values
//! meets a stop condition and skipping ahead when a value meets a pause condition.
//!
//! ## Core Types
//!
//! - **[`Source<T>`]**: anything that can be advanced one value at a time
//! - **[`Multiplexer<T>`]**: rotates through sources, yielding values
//! - **[`LabeledMultiplexer<L, T>`]**: same rotation, yielding `(label, value)` pairs
//! - **[`Condition<T>`]**: a boxed stop or pause predicate
//!
//! ## Example
//!
//! ```
//! use selector::prelude::*;
//!
//! // Odd numbers up to 10, taken alternately from each source
//! let mut mux = Multiplexer::new(
//!     |v: &i32| *v > 10,
//!     |v: &i32| v % 2 == 0,
//!     [from_iter(0..20), from_iter(5..20)],
//! );
//! let values: Vec<i32> = mux.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(values, vec![5, 1, 7, 3, 9, 5, 7, 9]);
//! ```
//!
//! ## Selection Rules
//!
//! Each pull advances the source under the cursor:
//! - exhausted sources are removed, and the source after them is tried next
//! - values meeting the stop condition are dropped together with their source
//! - values meeting the pause condition are dropped, and the next source is tried
//! - anything else is yielded, and the cursor moves to the next source
//!
//! Faults from a source or a condition are returned as [`Error`] without touching the
//! rotation, so the caller may retry or [`remove`](Multiplexer::remove) the culprit.
//! A pool in which every source is infinite and always paused never yields.

pub mod build;
mod builder;
mod condition;
mod error;
pub mod iter;
mod pool;
pub mod prelude;
mod pull;
mod select;
mod source;

pub use builder::Builder;
pub use condition::{Condition, never_pause, never_stop};
pub use error::{BoxError, Error, Result};
pub use pool::SequencePool;
pub use pull::Pull;
pub use select::{LabeledMultiplexer, Multiplexer};
pub use source::Source;
