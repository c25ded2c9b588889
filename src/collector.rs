//! [`Collector`]: how to reduce a sequence of items into a result.
//!
//! A collector bundles three functions:
//!
//! - a *supplier* producing a fresh, empty container,
//! - an *accumulator* adding one item to a container,
//! - a *finisher* turning the filled container into the result.
//!
//! It holds no state of its own, so one collector can be used any number of
//! times. Any type implementing [`Collect`] can finish a
//! [`Pipeline`](crate::Pipeline); besides [`Collector`], this crate provides
//! [`KindCollector`], whose supplier and accumulator come from a
//! [`Registry`](crate::Registry).

mod collect;
#[allow(clippy::module_inception)]
mod collector;
mod collector_sink;
mod kind_collector;

pub use collect::*;
pub use collector::*;
pub use collector_sink::*;
pub use kind_collector::*;
