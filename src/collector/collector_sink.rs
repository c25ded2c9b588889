use std::{fmt::Debug, ops::ControlFlow};

use crate::sink::{Sink, SinkBase};

use super::Collector;

/// A [`Sink`] that accumulates items with a [`Collector`].
///
/// This `struct` is created by [`Collector::into_sink()`]. See its documentation for more.
#[derive(Clone)]
pub struct CollectorSink<S, A, F, C> {
    collector: Collector<S, A, F>,
    // Only `None` while the accumulator runs.
    container: Option<C>,
}

impl<S, A, F, C> CollectorSink<S, A, F, C>
where
    S: Fn() -> C,
{
    pub(super) fn new(collector: Collector<S, A, F>) -> Self {
        let container = (collector.supplier)();
        Self {
            collector,
            container: Some(container),
        }
    }
}

impl<S, A, F, C, R> SinkBase for CollectorSink<S, A, F, C>
where
    S: Fn() -> C,
    F: Fn(C) -> R,
{
    type Output = R;

    fn finish(self) -> Self::Output {
        let container = self
            .container
            .unwrap_or_else(|| (self.collector.supplier)());
        (self.collector.finisher)(container)
    }
}

impl<T, S, A, F, C, R> Sink<T> for CollectorSink<S, A, F, C>
where
    S: Fn() -> C,
    A: Fn(C, T) -> C,
    F: Fn(C) -> R,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if let Some(container) = self.container.take() {
            self.container = Some((self.collector.accumulator)(container, item));
        }

        // A collector never stops early.
        ControlFlow::Continue(())
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self {
            collector,
            container,
        } = self;

        let container = container.unwrap_or_else(|| (collector.supplier)());
        let container = items.into_iter().fold(container, &collector.accumulator);
        (collector.finisher)(container)
    }
}

impl<S, A, F, C: Debug> Debug for CollectorSink<S, A, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorSink")
            .field("container", &self.container)
            .finish()
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
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        proptest_sink(
            || nums.iter().copied(),
            || {
                Collector::new(Vec::new, |mut v: Vec<i64>, num: i32| {
                    v.push(i64::from(num) * 2);
                    v
                })
                .with_finisher(|v: Vec<i64>| v.into_iter().sum::<i64>())
                .into_sink()
            },
            |_| false,
            |iter| iter.map(|num| i64::from(num) * 2).sum(),
        )
    }
}
