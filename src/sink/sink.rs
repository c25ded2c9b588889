use std::ops::ControlFlow;

use super::SinkBase;

/// Accumulates items of type `T` pushed into it.
///
/// - [`collect()`](Sink::collect) takes one item and returns whether the sink
///   still accepts items *after* this one.
/// - [`finish()`](SinkBase::finish) consumes the sink and yields its output.
///
/// Implement [`collect_many()`](Sink::collect_many) and
/// [`collect_then_finish()`](Sink::collect_then_finish) too when a whole
/// batch can be handled faster than one item at a time.
pub trait Sink<T>: SinkBase {
    /// Collects an item and returns whether the sink accepts more.
    ///
    /// Return [`Continue(())`](ControlFlow::Continue) if it can accumulate
    /// further items, or [`Break(())`](ControlFlow::Break) if it will not.
    /// A sink that merely ignores some items still returns `Continue`.
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Collects items from an iterator until the sink stops or the iterator
    /// is exhausted, and returns whether the sink accepts more.
    ///
    /// The iterator is never advanced past the item that caused the stop.
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        if self.break_hint().is_break() {
            ControlFlow::Break(())
        } else {
            // `try_for_each` over a `for` loop: adaptors like `skip` and `chain`
            // iterate faster internally.
            items.into_iter().try_for_each(|item| self.collect(item))
        }
    }

    /// Collects items from an iterator, then consumes the sink and returns
    /// its output.
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let mut this = self;
        let _ = this.collect_many(items);
        this.finish()
    }
}
