use std::{fmt::Debug, ops::ControlFlow};

use crate::sink::{Sink, SinkBase, assert_sink};

use super::raw_all_any::RawAllAny;

/// A [`Sink`] that tests whether every fed item satisfies a predicate.
///
/// Its [`Output`] is initially `true` and stays `true` while every item
/// satisfies the predicate. On the first item that does not, it returns
/// [`Break`] and the [`Output`] becomes `false`.
///
/// This sink corresponds to [`Iterator::all()`], and backs
/// [`Pipeline::all_match()`](crate::Pipeline::all_match).
///
/// # Examples
///
/// ```
/// use better_stream::{prelude::*, sink::All};
///
/// let mut sink = All::new(|x: i32| x > 0);
///
/// assert!(sink.collect(1).is_continue());
/// assert!(sink.collect(2).is_continue());
/// // First failing item.
/// assert!(sink.collect(-1).is_break());
///
/// assert!(!sink.finish());
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: SinkBase::Output
#[derive(Clone)]
pub struct All<F> {
    inner: RawAllAny<F, true>,
}

impl<F> All<F> {
    /// Creates a new instance of this sink with the default output of `true`.
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

impl<F> SinkBase for All<F> {
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

impl<T, F> Sink<T> for All<F>
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

impl<F> Debug for All<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt_as("All", f)
    }
}
