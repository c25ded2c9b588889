use std::ops::ControlFlow;

use super::{Skip, Take, assert_sink_base};

/// The item-independent half of a [`Sink`](super::Sink).
///
/// It carries the output type and the adaptors that never look at an item.
pub trait SinkBase: Sized {
    /// The result yielded by [`finish()`](SinkBase::finish).
    type Output;

    /// Consumes the sink and returns the accumulated result.
    fn finish(self) -> Self::Output;

    /// Returns [`Break(())`](ControlFlow::Break) if the sink is guaranteed to
    /// accept no more items, before any is fed.
    ///
    /// This method is meant to be called once, before feeding items in a loop,
    /// so that no item is pulled from its source for nothing.
    /// The default implementation always returns [`Continue(())`](ControlFlow::Continue).
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Creates a sink that accumulates only the first `n` items fed to it,
    /// then signals a stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// let mut sink = Collector::to_list().into_sink().take(2);
    ///
    /// assert!(sink.collect(1).is_continue());
    /// // The quota is met right after the 2nd item.
    /// assert!(sink.collect(2).is_break());
    ///
    /// assert_eq!(sink.finish(), [1, 2]);
    /// ```
    ///
    /// `take(0)` stops before anything is fed:
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// let sink = Collector::to_list().into_sink().take(0);
    /// assert!(sink.break_hint().is_break());
    ///
    /// let mut items = [1, 2, 3].into_iter();
    /// assert_eq!(sink.collect_then_finish(&mut items), Vec::<i32>::new());
    /// assert_eq!(items.len(), 3);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self> {
        assert_sink_base(Take::new(self, n))
    }

    /// Creates a sink that drops the first `n` items fed to it, then forwards
    /// the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// let sink = Collector::to_list().into_sink().skip(2);
    ///
    /// assert_eq!(sink.collect_then_finish([1, 2, 3, 4]), [3, 4]);
    /// ```
    #[inline]
    fn skip(self, n: usize) -> Skip<Self> {
        assert_sink_base(Skip::new(self, n))
    }
}
