use std::{fmt::Debug, ops::ControlFlow};

use crate::sink::{Sink, SinkBase, assert_sink};

use super::raw_all_any::RawAllAny;

/// A [`Sink`] that tests whether any fed item satisfies a predicate.
///
/// Its [`Output`] is initially `false` and stays `false` while no item
/// satisfies the predicate. On the first item that does, it returns
/// [`Break`] and the [`Output`] becomes `true`.
///
/// This sink corresponds to [`Iterator::any()`], and backs
/// [`Pipeline::any_match()`](crate::Pipeline::any_match).
///
/// # Examples
///
/// ```
/// use better_stream::{prelude::*, sink::Any};
///
/// let mut sink = Any::new(|x: i32| x < 0);
///
/// assert!(sink.collect(1).is_continue());
/// assert!(sink.collect(2).is_continue());
///
/// assert!(!sink.finish());
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: SinkBase::Output
#[derive(Clone)]
pub struct Any<F> {
    inner: RawAllAny<F, false>,
}

impl<F> Any<F> {
    /// Creates a new instance of this sink with the default output of `false`.
    #[inline]
    pub const fn new<T>(pred: F) -> Self
    where
        F: FnMut(T) -> bool,
    {
        assert_sink::<_, T>(Self {
            inner: RawAllAny::new(pred),
        })
    }

    /// Returns the current result of the accumulation.
    #[inline]
    pub const fn get(&self) -> bool {
        self.inner.get()
    }
}

impl<F> SinkBase for Any<F> {
    type Output = bool;

    #[inline]
    fn finish(self) -> Self::Output {
        self.get()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.inner.break_hint()
    }
}

impl<T, F> Sink<T> for Any<F>
where
    F: FnMut(T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.inner.test(item)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.inner.test_many(items)
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.inner.test_then_finish(items)
    }
}

impl<F> Debug for Any<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt_as("Any", f)
    }
}
