use std::ops::ControlFlow;

use crate::sink::{Sink, SinkBase};

/// A [`Sink`] that drops the first `n` items before it begins accumulating.
///
/// This `struct` is created by [`SinkBase::skip()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    sink: S,
    remaining: usize,
}

impl<S> Skip<S> {
    pub(in crate::sink) fn new(sink: S, n: usize) -> Self {
        Self { sink, remaining: n }
    }
}

impl<S> SinkBase for Skip<S>
where
    S: SinkBase,
{
    type Output = S::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.sink.finish()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.sink.break_hint()
    }
}

impl<S, T> Sink<T> for Skip<S>
where
    S: Sink<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.remaining > 0 {
            self.remaining -= 1;

            // Enough items are skipped, but the underlying sink may have
            // stopped from the beginning. Then we stop too.
            if self.remaining == 0 {
                self.sink.break_hint()
            } else {
                ControlFlow::Continue(())
            }
        } else {
            self.sink.collect(item)
        }
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        // Items are dropped before the underlying sink sees any,
        // so guard against a sink that has stopped from the beginning.
        self.break_hint()?;

        let mut items = items.into_iter();
        while self.remaining > 0 {
            // Never resume an exhausted iterator.
            if items.next().is_none() {
                return ControlFlow::Continue(());
            }
            self.remaining -= 1;
        }

        self.sink.collect_many(items)
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        if self.break_hint().is_break() {
            return self.sink.finish();
        }

        let mut items = items.into_iter();
        if drop_n_items(&mut items, self.remaining) {
            self.sink.collect_then_finish(items)
        } else {
            self.sink.finish()
        }
    }
}

// Returns `true` if all `n` items were dropped (the iterator did not end earlier).
fn drop_n_items(items: &mut impl Iterator, n: usize) -> bool {
    if n > 0 {
        items.nth(n - 1).is_some()
    } else {
        true
    }
}
