use std::{convert::identity, fmt::Debug, hash::Hash};

use indexmap::IndexSet;

use super::{Collect, CollectorSink};

/// A reusable recipe to reduce items: supplier, accumulator, and finisher.
///
/// [`collect()`](Collect::collect) calls the supplier once, folds the
/// accumulator over the items in order, then applies the finisher. With no
/// item at all, the result is the finisher applied to a fresh container.
///
/// # Examples
///
/// ```
/// use better_stream::prelude::*;
///
/// let joined = Collector::new(String::new, |mut s: String, word: &str| {
///     if !s.is_empty() {
///         s.push(' ');
///     }
///     s.push_str(word);
///     s
/// })
/// .with_finisher(|s: String| s.to_uppercase());
///
/// assert_eq!(joined.collect(["the", "noble", "singer"]), "THE NOBLE SINGER");
/// // Stateless: it can be used again.
/// assert_eq!(joined.collect(Vec::<&str>::new()), "");
/// ```
#[derive(Clone)]
pub struct Collector<S, A, F> {
    pub(super) supplier: S,
    pub(super) accumulator: A,
    pub(super) finisher: F,
}

/// The type of [`Collector::to_list()`].
pub type ToList<T> = Collector<fn() -> Vec<T>, fn(Vec<T>, T) -> Vec<T>, fn(Vec<T>) -> Vec<T>>;

/// The type of [`Collector::to_set()`].
pub type ToSet<T> =
    Collector<fn() -> IndexSet<T>, fn(IndexSet<T>, T) -> IndexSet<T>, fn(IndexSet<T>) -> IndexSet<T>>;

impl<S, A, C> Collector<S, A, fn(C) -> C> {
    /// Creates a collector from a supplier and an accumulator, keeping the
    /// filled container as the result.
    #[inline]
    pub fn new<T>(supplier: S, accumulator: A) -> Self
    where
        S: Fn() -> C,
        A: Fn(C, T) -> C,
    {
        Self {
            supplier,
            accumulator,
            finisher: identity,
        }
    }
}

impl<T> ToList<T> {
    /// Creates a collector that pushes items into a [`Vec`], in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// assert_eq!(Collector::to_list().collect("abc".chars()), ['a', 'b', 'c']);
    /// ```
    #[inline]
    pub fn to_list() -> Self {
        Self {
            supplier: Vec::new,
            accumulator: push,
            finisher: identity,
        }
    }
}

impl<T: Hash + Eq> ToSet<T> {
    /// Creates a collector that inserts items into an [`IndexSet`],
    /// keeping the first occurrence of each.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// let set = Collector::to_set().collect([3, 1, 3, 2, 1]);
    /// assert!(set.into_iter().eq([3, 1, 2]));
    /// ```
    #[inline]
    pub fn to_set() -> Self {
        Self {
            supplier: IndexSet::new,
            accumulator: insert,
            finisher: identity,
        }
    }
}

impl<S, A, F> Collector<S, A, F> {
    /// Replaces the finisher.
    #[inline]
    pub fn with_finisher<G>(self, finisher: G) -> Collector<S, A, G> {
        Collector {
            supplier: self.supplier,
            accumulator: self.accumulator,
            finisher,
        }
    }

    /// Turns this collector into a [`Sink`](crate::sink::Sink), calling the
    /// supplier right away.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::prelude::*;
    ///
    /// let mut sink = Collector::to_list().into_sink();
    /// assert!(sink.collect(1).is_continue());
    /// assert!(sink.collect_many([2, 3]).is_continue());
    ///
    /// assert_eq!(sink.finish(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_sink<C>(self) -> CollectorSink<S, A, F, C>
    where
        S: Fn() -> C,
    {
        CollectorSink::new(self)
    }
}

impl<T, C, R, S, A, F> Collect<T> for Collector<S, A, F>
where
    S: Fn() -> C,
    A: Fn(C, T) -> C,
    F: Fn(C) -> R,
{
    type Output = R;

    fn collect<I>(&self, items: I) -> R
    where
        I: IntoIterator<Item = T>,
    {
        let container = items
            .into_iter()
            .fold((self.supplier)(), &self.accumulator);
        (self.finisher)(container)
    }
}

impl<S, A, F> Debug for Collector<S, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Every field is a function.
        f.debug_struct("Collector").finish_non_exhaustive()
    }
}

fn push<T>(mut list: Vec<T>, item: T) -> Vec<T> {
    list.push(item);
    list
}

fn insert<T: Hash + Eq>(mut set: IndexSet<T>, item: T) -> IndexSet<T> {
    set.insert(item);
    set
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn empty_input_is_finished_supplier() {
        let counted = Collector::new(BTreeMap::new, |mut counts: BTreeMap<char, usize>, c| {
            *counts.entry(c).or_default() += 1;
            counts
        })
        .with_finisher(|counts: BTreeMap<char, usize>| counts.len());

        assert_eq!(counted.collect("".chars()), 0);
        assert_eq!(counted.collect("noble".chars()), 5);
        assert_eq!(counted.collect("singer and".chars()), 9);
    }

    #[test]
    fn to_list_preserves_order() {
        let list = Collector::to_list();

        assert_eq!(list.collect([3, 1, 2]), [3, 1, 2]);
        assert_eq!(list.collect(Vec::<i32>::new()), Vec::<i32>::new());
        // Through a reference.
        assert_eq!((&list).collect([4]), [4]);
    }

    #[test]
    fn fresh_container_per_collect() {
        let list = Collector::to_list();

        let first = list.collect([1, 2]);
        let second = list.collect([3]);

        assert_eq!(first, [1, 2]);
        assert_eq!(second, [3]);
    }

    #[test]
    fn to_set_collapses_duplicates() {
        let set = Collector::to_set().collect(["b", "a", "b", "c", "a"]);

        assert_eq!(set.len(), 3);
        assert!(set.iter().eq(&["b", "a", "c"]));
    }
}
