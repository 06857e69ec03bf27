//! Round-robin selection over sources
//!
//! [`Multiplexer`] yields bare values, [`LabeledMultiplexer`] yields `(label, value)`
//! pairs. Both drive the same rotation: one source is advanced per step, in
//! registration order, until a value passes the stop and pause conditions or every
//! source has been retired.

mod labeled;
mod plain;
mod rotation;

pub use labeled::LabeledMultiplexer;
pub use plain::Multiplexer;

/// Introspection name for a source registered through a factory.
fn factory_name<F>() -> &'static str {
    std::any::type_name::<F>()
}
