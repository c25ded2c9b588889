//! [`Pipeline`]: a chainable, kind-preserving stream over a finite collection.

use std::{fmt::Display, hash::Hash, sync::Arc};

use tracing::{debug, trace};

use crate::{
    collector::Collect,
    container::Container,
    error::{Error, Result},
    kind::ContainerKind,
    registry::{KindSink, KindStrategy, Registry},
    sink::{All, Any, Sink, SinkBase},
};

/// A chainable stream over a finite, in-memory [`Container`].
///
/// Intermediate operations ([`filter()`](Pipeline::filter),
/// [`map()`](Pipeline::map), [`limit()`](Pipeline::limit),
/// [`skip()`](Pipeline::skip)) rebuild the working container eagerly, in the
/// same kind, through the pipeline's [`Registry`]. Terminal operations
/// ([`all_match()`](Pipeline::all_match), [`count()`](Pipeline::count),
/// [`collect()`](Pipeline::collect), ...) consume the pipeline.
///
/// Every operation takes the pipeline by value, so a pipeline that reached a
/// terminal operation cannot be used again:
///
/// ```compile_fail
/// use better_stream::Pipeline;
///
/// let pipeline = Pipeline::of(vec![1, 2, 3]);
/// let _ = pipeline.count();
/// let _ = pipeline.count();
/// ```
///
/// # Examples
///
/// ```
/// use better_stream::prelude::*;
///
/// let evens = Pipeline::of(vec![1, 2, 3, 4, 5, 6])
///     .filter(|&x| x % 2 == 0)?
///     .map(|x| x * 10)?
///     .skip(1)?
///     .collect(Collector::to_list());
///
/// assert_eq!(evens, [40, 60]);
/// # Ok::<(), better_stream::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    current: Container<T>,
    registry: Arc<Registry<T>>,
}

impl<T: Hash + Eq> Pipeline<T> {
    /// Creates a pipeline over `initial` with the [standard registry](Registry::standard).
    ///
    /// The container is taken as is; no item is copied.
    ///
    /// The standard registry holds the [`Set`](ContainerKind::Set) kind, so
    /// items must be [`Hash`] and [`Eq`]. For other items, such as floats, use
    /// [`with_registry()`](Pipeline::with_registry) with [`Registry::basic()`].
    #[inline]
    pub fn of(initial: impl Into<Container<T>>) -> Self {
        Self::with_registry(initial, Registry::standard())
    }
}

impl<T> Pipeline<T> {
    /// Creates a pipeline over `initial` with an explicit registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, Registry};
    ///
    /// // Floats are not `Hash`, so they get the basic registry.
    /// let large = Pipeline::with_registry(vec![1.0, 2.0, 3.0], Registry::basic())
    ///     .filter(|&x| x > 1.5)?
    ///     .collect(Collector::to_list());
    ///
    /// assert_eq!(large, [2.0, 3.0]);
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    #[inline]
    pub fn with_registry(
        initial: impl Into<Container<T>>,
        registry: impl Into<Arc<Registry<T>>>,
    ) -> Self {
        Self {
            current: initial.into(),
            registry: registry.into(),
        }
    }

    /// Creates the lazy concatenation of `a` followed by `b`.
    ///
    /// The result has the [`Chain`](ContainerKind::Chain) kind and keeps
    /// `a`'s registry. Since no registry knows that kind, it must be consumed
    /// or converted with [`into_kind()`](Pipeline::into_kind) before any
    /// intermediate operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, ContainerKind};
    ///
    /// let both = Pipeline::concat(Pipeline::of(vec![1, 2]), Pipeline::of([3, 4]));
    /// assert_eq!(both.kind(), ContainerKind::Chain);
    ///
    /// let firsts = both
    ///     .into_kind(ContainerKind::Sequence)?
    ///     .limit(3)?
    ///     .collect(Collector::to_list());
    /// assert_eq!(firsts, [1, 2, 3]);
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    pub fn concat(a: Self, b: Self) -> Self {
        Self {
            current: Container::concat(a.current, b.current),
            registry: a.registry,
        }
    }

    /// Returns the kind of the working container.
    #[inline]
    pub const fn kind(&self) -> ContainerKind {
        self.current.kind()
    }

    /// Returns the number of items in the working container.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns `true` if the working container has no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns the working container.
    #[inline]
    pub const fn container(&self) -> &Container<T> {
        &self.current
    }

    /// Returns the registry the pipeline rebuilds with.
    #[inline]
    pub const fn registry(&self) -> &Arc<Registry<T>> {
        &self.registry
    }

    /// Keeps the items satisfying `pred`, in order, in the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the current kind is not registered.
    pub fn filter<P>(self, pred: P) -> Result<Self>
    where
        P: FnMut(&T) -> bool,
    {
        let kind = self.kind();
        self.rebuild("filter", kind, |sink, current| {
            sink.collect_then_finish(current.into_iter().filter(pred))
        })
    }

    /// Transforms every item, keeping the kind.
    ///
    /// The new pipeline uses the [standard registry](Registry::standard) for
    /// `U`. For a [`Set`](ContainerKind::Set), mapped values that compare
    /// equal collapse into one. Only `U` needs to be [`Hash`]; use
    /// [`map_with()`](Pipeline::map_with) for custom kinds or mapped items
    /// that are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the current kind is missing from
    /// this pipeline's registry or from the standard one.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, ContainerKind};
    /// use indexmap::IndexSet;
    ///
    /// let parities = Pipeline::of(IndexSet::from([1, 2, 3, 4])).map(|x| x % 2)?;
    ///
    /// assert_eq!(parities.kind(), ContainerKind::Set);
    /// assert_eq!(parities.count(), 2);
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Result<Pipeline<U>>
    where
        U: Hash + Eq,
        F: FnMut(T) -> U,
    {
        self.map_with(Registry::standard(), mapper)
    }

    /// Transforms every item, keeping the kind, and continues with `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the current kind is missing from
    /// this pipeline's registry or from `registry`.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, ContainerKind, Registry};
    ///
    /// let roots = Pipeline::of([1_u32, 4, 9])
    ///     .map_with(Registry::basic(), |x| f64::from(x).sqrt())?;
    ///
    /// assert_eq!(roots.kind(), ContainerKind::Tuple);
    /// assert_eq!(roots.collect(Collector::to_list()), [1.0, 2.0, 3.0]);
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    pub fn map_with<U, F>(
        self,
        registry: impl Into<Arc<Registry<U>>>,
        mapper: F,
    ) -> Result<Pipeline<U>>
    where
        F: FnMut(T) -> U,
    {
        let registry = registry.into();
        let Self {
            current,
            registry: source,
        } = self;

        let kind = current.kind();
        lookup(&source, "map", kind)?;
        let sink = KindSink::new(lookup(&registry, "map", kind)?)?;

        let before = current.len();
        let current = sink.collect_then_finish(current.into_iter().map(mapper))?;
        trace!(op = "map", %kind, before, after = current.len(), "rebuilt container");

        Ok(Pipeline { current, registry })
    }

    /// Keeps at most the first `max_size` items.
    ///
    /// If there are more, the container is rebuilt from the first `max_size`
    /// items only and the rest is never visited. Otherwise nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the current kind is not registered,
    /// or [`Error::InvalidArgument`] if `max_size` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, Error};
    ///
    /// assert_eq!(Pipeline::of(vec![1, 2, 3]).limit(2)?.count(), 2);
    /// assert_eq!(Pipeline::of(vec![1, 2, 3]).limit(5)?.count(), 3);
    ///
    /// assert!(matches!(
    ///     Pipeline::of(vec![1, 2, 3]).limit(-1),
    ///     Err(Error::InvalidArgument { name: "max_size", .. }),
    /// ));
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    pub fn limit<N>(self, max_size: N) -> Result<Self>
    where
        N: TryInto<usize> + Copy + Display,
    {
        let kind = self.kind();
        lookup(&self.registry, "limit", kind)?;
        let max_size = count_arg("max_size", max_size)?;

        if self.len() <= max_size {
            return Ok(self);
        }
        self.rebuild("limit", kind, |sink, current| {
            sink.take(max_size).collect_then_finish(current)
        })
    }

    /// Drops the first `n` items.
    ///
    /// With `n` at least the number of items, the result is an empty
    /// container of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the current kind is not registered,
    /// or [`Error::InvalidArgument`] if `n` is negative.
    pub fn skip<N>(self, n: N) -> Result<Self>
    where
        N: TryInto<usize> + Copy + Display,
    {
        let kind = self.kind();
        lookup(&self.registry, "skip", kind)?;
        let n = count_arg("n", n)?;

        self.rebuild("skip", kind, |sink, current| {
            sink.skip(n).collect_then_finish(current)
        })
    }

    /// Rebuilds every item, in order, into a container of another kind.
    ///
    /// The current kind does not need to be registered, which makes this the
    /// way out of a [`Chain`](ContainerKind::Chain).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if `kind` is not registered.
    pub fn into_kind(self, kind: ContainerKind) -> Result<Self> {
        self.rebuild("into_kind", kind, |sink, current| {
            sink.collect_then_finish(current)
        })
    }

    /// Returns `true` if every item satisfies `pred`.
    ///
    /// Stops at the first item that does not. An empty pipeline returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::Pipeline;
    ///
    /// assert!(!Pipeline::of(vec![1, 2, 3]).all_match(|x| x % 2 == 0));
    /// assert!(Pipeline::of(Vec::<i32>::new()).all_match(|x| x % 2 == 0));
    /// ```
    pub fn all_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        All::new(|item: &T| pred(item)).collect_then_finish(self.current.iter())
    }

    /// Returns `true` if some item satisfies `pred`.
    ///
    /// Stops at the first item that does. An empty pipeline returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::Pipeline;
    ///
    /// assert!(Pipeline::of(vec![1, 2, 3]).any_match(|x| x % 2 == 0));
    /// assert!(!Pipeline::of(Vec::<i32>::new()).any_match(|x| x % 2 == 0));
    /// ```
    pub fn any_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        Any::new(|item: &T| pred(item)).collect_then_finish(self.current.iter())
    }

    /// Returns `true` if no item satisfies `pred`.
    ///
    /// It is the negation of [`any_match()`](Pipeline::any_match).
    #[inline]
    pub fn none_match<P>(self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(pred)
    }

    /// Returns the number of items.
    #[inline]
    pub fn count(self) -> usize {
        self.current.len()
    }

    /// Hands every item, in iteration order, to `collector`.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{prelude::*, ContainerKind};
    ///
    /// let pipeline = Pipeline::of(vec![3, 1, 3, 2]);
    /// let to_set = pipeline.registry().collector(ContainerKind::Set)?;
    ///
    /// let set = pipeline.collect(&to_set)?;
    /// assert!(set.into_iter().eq([3, 1, 2]));
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    #[inline]
    pub fn collect<C>(self, collector: C) -> C::Output
    where
        C: Collect<T>,
    {
        collector.collect(self.current)
    }

    /// Returns the working container.
    #[inline]
    pub fn into_container(self) -> Container<T> {
        self.current
    }

    fn rebuild<F>(self, op: &'static str, kind: ContainerKind, build: F) -> Result<Self>
    where
        F: FnOnce(KindSink<'_, T>, Container<T>) -> Result<Container<T>>,
    {
        let Self { current, registry } = self;

        let sink = KindSink::new(lookup(&registry, op, kind)?)?;
        let before = current.len();
        let current = build(sink, current)?;
        trace!(op, %kind, before, after = current.len(), "rebuilt container");

        Ok(Self { current, registry })
    }
}

fn lookup<'r, T>(
    registry: &'r Registry<T>,
    op: &'static str,
    kind: ContainerKind,
) -> Result<&'r (dyn KindStrategy<T> + Send + Sync)> {
    registry
        .strategy(kind)
        .inspect_err(|_| debug!(op, %kind, "container kind is not registered"))
}

fn count_arg<N>(name: &'static str, n: N) -> Result<usize>
where
    N: TryInto<usize> + Copy + Display,
{
    n.try_into().map_err(|_| {
        Error::invalid_argument(
            name,
            format!("expected a non-negative count that fits in `usize`, got {n}"),
        )
    })
}
