//! Pipelines.
//!
//! Adapters that run a [crate::gate::Gate] over a whole sequence of items:
//! - [GateExt] adds [GateExt::gate] and [GateExt::try_gate] to every iterator,
//! - [gate_stream] and [gate_stream_with] do the same for [futures::Stream]s and support asynchronous checks.
//!
//! Both call [crate::gate::Gate::finish] when upstream ends, so items that are still held are dropped.
mod iter;
mod stream;

pub use iter::{GateExt, GateIter, TryGateIter};
pub use stream::{gate_stream, gate_stream_with};
