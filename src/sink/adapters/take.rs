use std::ops::ControlFlow;

use crate::sink::{Sink, SinkBase};

/// A [`Sink`] that stops accumulating after the first `n` items.
///
/// This `struct` is created by [`SinkBase::take()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Take<S> {
    sink: S,
    // Unspecified if the underlying sink stops by itself.
    remaining: usize,
}

impl<S> Take<S> {
    pub(in crate::sink) fn new(sink: S, n: usize) -> Self {
        Self { sink, remaining: n }
    }
}

impl<S> SinkBase for Take<S>
where
    S: SinkBase,
{
    type Output = S::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.sink.finish()
    }

    fn break_hint(&self) -> ControlFlow<()> {
        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            self.sink.break_hint()
        }
    }
}

impl<S, T> Sink<T> for Take<S>
where
    S: Sink<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        // `take(0)` has not signaled a stop yet, so it must not panic here.
        if self.remaining == 0 {
            return ControlFlow::Break(());
        }

        self.remaining -= 1;
        let cf = self.sink.collect(item);

        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            cf
        }
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        if self.remaining == 0 {
            return ControlFlow::Break(());
        }

        // The underlying sink may stop before taking all `remaining` items,
        // so count what actually passes through.
        let cf = self.sink.collect_many(
            items
                .into_iter()
                .take(self.remaining)
                .inspect(|_| self.remaining -= 1),
        );

        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            cf
        }
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        // No need to track the count: we are gone after this.
        self.sink
            .collect_then_finish(items.into_iter().take(self.remaining))
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::test_utils::proptest_sink;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=8),
            take_count in ..=10_usize,
        ) {
            all_collect_methods_impl(nums, take_count)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>, take_count: usize) -> TestCaseResult {
        proptest_sink(
            || nums.iter().copied(),
            || Collector::to_list().into_sink().take(take_count),
            |iter| iter.count() >= take_count,
            |iter| iter.take(take_count).collect(),
        )
    }
}
