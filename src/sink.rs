//! The push-based protocol every rebuild and reduction is expressed with.
//!
//! A [`Sink`] is fed items one at a time and answers each with a
//! [`ControlFlow`]: [`Continue(())`] asks for more, [`Break(())`] says it has
//! everything it needs. Producers stop pulling from their source on
//! `Break`, which is what makes [`limit()`](crate::Pipeline::limit) and
//! [`any_match()`](crate::Pipeline::any_match) short-circuit.
//!
//! # Unspecified behaviors
//!
//! After [`Sink::collect()`] or [`Sink::collect_many()`] returned
//! [`Break(())`] once, or [`SinkBase::break_hint()`] did, the behavior of
//! further calls to anything but [`finish()`](SinkBase::finish) is
//! unspecified. It is never `unsafe`.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use better_stream::prelude::*;
//!
//! /// Sums items until the total passes a threshold.
//! struct SumUntil {
//!     total: i32,
//!     threshold: i32,
//! }
//!
//! impl SinkBase for SumUntil {
//!     type Output = i32;
//!
//!     fn finish(self) -> i32 {
//!         self.total
//!     }
//! }
//!
//! impl Sink<i32> for SumUntil {
//!     fn collect(&mut self, item: i32) -> ControlFlow<()> {
//!         self.total += item;
//!         if self.total > self.threshold {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let mut items = [4, 5, 6, 7].into_iter();
//! let total = SumUntil { total: 0, threshold: 8 }.collect_then_finish(&mut items);
//!
//! assert_eq!(total, 9);
//! // The sink stopped the source right after `5`.
//! assert!(items.eq([6, 7]));
//! ```
//!
//! [`ControlFlow`]: std::ops::ControlFlow
//! [`Continue(())`]: std::ops::ControlFlow::Continue
//! [`Break(())`]: std::ops::ControlFlow::Break

mod adapters;
mod all_any;
#[allow(clippy::module_inception)]
mod sink;
mod sink_base;

pub use adapters::*;
pub use all_any::*;
pub use sink::*;
pub use sink_base::*;

#[inline(always)]
pub(crate) const fn assert_sink_base<S>(sink: S) -> S
where
    S: SinkBase,
{
    sink
}

#[inline(always)]
pub(crate) const fn assert_sink<S, T>(sink: S) -> S
where
    S: Sink<T>,
{
    sink
}
