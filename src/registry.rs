//! The accumulator and combiner table, keyed by [`ContainerKind`].
//!
//! A [`Registry`] tells a pipeline, for every kind it knows, how to build an
//! empty container, add one item to it, and merge two of them. Pipelines only
//! rebuild containers whose kind is registered; any other kind fails with
//! [`Error::UnsupportedKind`].
//!
//! # Example
//!
//! Registering a custom kind, then running a pipeline over it:
//!
//! ```
//! use better_stream::prelude::*;
//! use better_stream::{CustomKind, KindId, Registry};
//!
//! const PRIORITY_QUEUE: KindId = KindId::new("priority_queue");
//!
//! let registry = Registry::standard().with(CustomKind::new(
//!     PRIORITY_QUEUE,
//!     |queue: &mut Vec<u32>, item| {
//!         let at = queue.partition_point(|&queued| queued >= item);
//!         queue.insert(at, item);
//!     },
//! ))?;
//!
//! let queue = registry.collector(PRIORITY_QUEUE.into())?.collect([5, 1, 8, 3])?;
//! let top_two = Pipeline::with_registry(queue, registry)
//!     .limit(2)?
//!     .collect(Collector::to_list());
//!
//! assert_eq!(top_two, [8, 5]);
//! # Ok::<(), better_stream::Error>(())
//! ```

mod kind_sink;
mod strategy;

pub use kind_sink::*;
pub use strategy::*;

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    hash::Hash,
    sync::Arc,
};

use tracing::debug;

use crate::{
    collector::KindCollector,
    container::Container,
    error::{Error, Result},
    kind::ContainerKind,
};

type DynStrategy<T> = dyn KindStrategy<T> + Send + Sync;

/// A table of [`KindStrategy`]s, one per [`ContainerKind`].
///
/// A registry is plain configuration: build it once, then share it (a
/// pipeline keeps it in an [`Arc`]). [`ContainerKind::Chain`] can never be
/// registered.
pub struct Registry<T> {
    strategies: HashMap<ContainerKind, Arc<DynStrategy<T>>>,
}

impl<T> Registry<T> {
    /// Creates a registry that knows no kind.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Creates a registry with the kinds that put no bound on the item type:
    /// [`Sequence`](ContainerKind::Sequence) and [`Tuple`](ContainerKind::Tuple).
    ///
    /// Use it for items that are not [`Hash`], like floats.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{ContainerKind, Registry};
    ///
    /// let registry = Registry::<f64>::basic();
    ///
    /// assert!(registry.contains(ContainerKind::Sequence));
    /// assert!(registry.contains(ContainerKind::Tuple));
    /// assert!(!registry.contains(ContainerKind::Set));
    /// ```
    pub fn basic() -> Self {
        let mut registry = Self::new();
        registry.insert(SequenceKind);
        registry.insert(TupleKind);
        registry
    }

    /// Adds a strategy for its kind, replacing the previous one if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the strategy claims
    /// [`ContainerKind::Chain`].
    pub fn register<K>(&mut self, strategy: K) -> Result<&mut Self>
    where
        K: KindStrategy<T> + Send + Sync + 'static,
    {
        let kind = strategy.kind();
        if kind == ContainerKind::Chain {
            return Err(Error::invalid_argument(
                "strategy",
                "the `chain` kind is reserved for concatenations",
            ));
        }

        let replaced = self.insert(strategy);
        debug!(%kind, replaced, "registered container kind");
        Ok(self)
    }

    /// Builder counterpart of [`register()`](Registry::register).
    ///
    /// # Errors
    ///
    /// Same as [`register()`](Registry::register).
    #[inline]
    pub fn with<K>(mut self, strategy: K) -> Result<Self>
    where
        K: KindStrategy<T> + Send + Sync + 'static,
    {
        self.register(strategy)?;
        Ok(self)
    }

    /// Returns `true` if the kind has a strategy.
    #[inline]
    pub fn contains(&self, kind: ContainerKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// Returns the registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = ContainerKind> + '_ {
        self.strategies.keys().copied()
    }

    /// Returns the strategy of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the kind is not registered.
    pub fn strategy(&self, kind: ContainerKind) -> Result<&(dyn KindStrategy<T> + Send + Sync)> {
        self.strategies
            .get(&kind)
            .map(|strategy| &**strategy)
            .ok_or(Error::UnsupportedKind(kind))
    }

    /// Returns a fresh, empty container of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the kind is not registered.
    #[inline]
    pub fn empty(&self, kind: ContainerKind) -> Result<Container<T>> {
        Ok(self.strategy(kind)?.empty())
    }

    /// Adds one item to a container, with the strategy of the container's kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the container's kind is not
    /// registered, or whatever the strategy reports.
    #[inline]
    pub fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()> {
        self.strategy(container.kind())?.accumulate(container, item)
    }

    /// Merges two containers of the same kind, `a`'s items first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if `a`'s kind is not registered,
    /// or [`Error::KindMismatch`] if `b` is of another kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_stream::{Container, Registry};
    /// use indexmap::IndexSet;
    ///
    /// let registry = Registry::standard();
    ///
    /// let merged = registry.combine(
    ///     IndexSet::from([1, 2]).into(),
    ///     IndexSet::from([2, 3]).into(),
    /// )?;
    /// assert!(merged.into_iter().eq([1, 2, 3]));
    ///
    /// assert!(registry.combine(vec![1].into(), [2].into()).is_err());
    /// # Ok::<(), better_stream::Error>(())
    /// ```
    pub fn combine(&self, a: Container<T>, b: Container<T>) -> Result<Container<T>> {
        let mut a = a;
        self.strategy(a.kind())?.combine(&mut a, b)?;
        Ok(a)
    }

    /// Creates a [`Sink`](crate::sink::Sink) that rebuilds items into a
    /// container of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the kind is not registered, or
    /// [`Error::KindMismatch`] if its strategy supplies a container of another kind.
    #[inline]
    pub fn sink(&self, kind: ContainerKind) -> Result<KindSink<'_, T>> {
        KindSink::new(self.strategy(kind)?)
    }

    /// Creates a collector whose supplier and accumulator come from
    /// the strategy of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] if the kind is not registered.
    pub fn collector(&self, kind: ContainerKind) -> Result<KindCollector<T>> {
        self.strategies
            .get(&kind)
            .map(|strategy| KindCollector::new(Arc::clone(strategy)))
            .ok_or(Error::UnsupportedKind(kind))
    }

    // Returns whether a strategy was replaced.
    fn insert<K>(&mut self, strategy: K) -> bool
    where
        K: KindStrategy<T> + Send + Sync + 'static,
    {
        self.strategies
            .insert(strategy.kind(), Arc::new(strategy))
            .is_some()
    }
}

impl<T: Hash + Eq> Registry<T> {
    /// Creates a registry with every built-in kind:
    /// [`Sequence`](ContainerKind::Sequence), [`Set`](ContainerKind::Set),
    /// and [`Tuple`](ContainerKind::Tuple).
    ///
    /// This is the registry [`Pipeline::of()`](crate::Pipeline::of) uses.
    pub fn standard() -> Self {
        let mut registry = Self::basic();
        registry.insert(SetKind);
        registry
    }
}

impl<T> Default for Registry<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            strategies: self.strategies.clone(),
        }
    }
}

impl<T> Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::*;
    use crate::{kind::KindId, prelude::*, test_utils::capture_logs};

    const RING: KindId = KindId::new("ring3");

    // Keeps the last three items.
    fn ring() -> CustomKind<impl Fn(&mut Vec<i32>, i32) + Send + Sync + Clone> {
        CustomKind::new(RING, |ring: &mut Vec<i32>, item| {
            if ring.len() == 3 {
                ring.remove(0);
            }
            ring.push(item);
        })
    }

    // Claims the sequence kind but supplies tuples.
    struct Liar;

    impl KindStrategy<i32> for Liar {
        fn kind(&self) -> ContainerKind {
            ContainerKind::Sequence
        }

        fn empty(&self) -> Container<i32> {
            Container::Tuple(Vec::new())
        }

        fn accumulate(&self, container: &mut Container<i32>, item: i32) -> Result<()> {
            SequenceKind.accumulate(container, item)
        }

        fn combine(&self, container: &mut Container<i32>, other: Container<i32>) -> Result<()> {
            SequenceKind.combine(container, other)
        }
    }

    #[test]
    fn builtin_tables() {
        let mut kinds = Registry::<i32>::standard().kinds().collect::<Vec<_>>();
        kinds.sort_by_key(ContainerKind::name);
        assert_eq!(
            kinds,
            [
                ContainerKind::Sequence,
                ContainerKind::Set,
                ContainerKind::Tuple
            ]
        );

        assert_eq!(Registry::<f32>::basic().kinds().count(), 2);
        assert_eq!(Registry::<f32>::new().kinds().count(), 0);
        assert_eq!(Registry::<f32>::default().kinds().count(), 0);
    }

    #[test]
    fn unregistered_kind() {
        let registry = Registry::<i32>::basic();

        assert_eq!(
            registry.empty(ContainerKind::Set).unwrap_err(),
            Error::UnsupportedKind(ContainerKind::Set),
        );
        assert_eq!(
            registry.collector(RING.into()).unwrap_err(),
            Error::UnsupportedKind(ContainerKind::Custom(RING)),
        );
        assert!(registry.sink(ContainerKind::Chain).is_err());
    }

    #[test]
    fn chain_is_reserved() {
        struct ChainKind;

        impl KindStrategy<i32> for ChainKind {
            fn kind(&self) -> ContainerKind {
                ContainerKind::Chain
            }

            fn empty(&self) -> Container<i32> {
                Container::concat(Container::default(), Container::default())
            }

            fn accumulate(&self, _: &mut Container<i32>, _: i32) -> Result<()> {
                Ok(())
            }

            fn combine(&self, _: &mut Container<i32>, _: Container<i32>) -> Result<()> {
                Ok(())
            }
        }

        let mut registry = Registry::new();
        assert!(matches!(
            registry.register(ChainKind),
            Err(Error::InvalidArgument {
                name: "strategy",
                ..
            })
        ));
        assert!(!registry.contains(ContainerKind::Chain));
    }

    #[test]
    fn accumulate_by_container_kind() {
        let registry = Registry::standard().with(ring()).unwrap();

        let mut set = registry.empty(ContainerKind::Set).unwrap();
        for item in [3, 1, 3, 2, 1] {
            registry.accumulate(&mut set, item).unwrap();
        }
        assert!(set.iter().eq(&[3, 1, 2]));

        let mut ring = registry.empty(RING.into()).unwrap();
        for item in 1..=5 {
            registry.accumulate(&mut ring, item).unwrap();
        }
        assert!(ring.iter().eq(&[3, 4, 5]));

        let mut chain = Container::concat(vec![1].into(), vec![2].into());
        assert_eq!(
            registry.accumulate(&mut chain, 3).unwrap_err(),
            Error::UnsupportedKind(ContainerKind::Chain),
        );
    }

    #[test]
    fn strategies_reject_other_kinds() {
        let mut tuple = Container::Tuple(vec![1]);
        assert_eq!(
            SequenceKind.accumulate(&mut tuple, 2).unwrap_err(),
            Error::mismatch(ContainerKind::Sequence, ContainerKind::Tuple),
        );

        let mut set = Container::Set(IndexSet::from([1]));
        assert_eq!(
            SetKind
                .combine(&mut set, Container::Sequence(vec![2]))
                .unwrap_err(),
            Error::mismatch(ContainerKind::Set, ContainerKind::Sequence),
        );

        let mut other_custom = Container::Custom(KindId::new("other"), vec![]);
        assert_eq!(
            ring().accumulate(&mut other_custom, 1).unwrap_err(),
            Error::mismatch(
                ContainerKind::Custom(RING),
                ContainerKind::Custom(KindId::new("other")),
            ),
        );
    }

    #[test]
    fn combine_keeps_order() {
        let registry = Registry::standard().with(ring()).unwrap();

        let list = registry
            .combine(vec![1, 2].into(), vec![3].into())
            .unwrap();
        assert!(list.into_iter().eq([1, 2, 3]));

        let tuple = registry.combine([1].into(), [2, 3].into()).unwrap();
        assert_eq!(tuple.kind(), ContainerKind::Tuple);
        assert!(tuple.into_iter().eq([1, 2, 3]));

        let ring = registry
            .combine(
                Container::Custom(RING, vec![1, 2]),
                Container::Custom(RING, vec![3, 4]),
            )
            .unwrap();
        assert!(ring.into_iter().eq([2, 3, 4]));

        assert_eq!(
            registry
                .combine([1].into(), vec![2].into())
                .unwrap_err(),
            Error::mismatch(ContainerKind::Tuple, ContainerKind::Sequence),
        );
    }

    #[test]
    fn sink_rejects_lying_supplier() {
        let registry = Registry::new().with(Liar).unwrap();

        assert_eq!(
            registry.sink(ContainerKind::Sequence).unwrap_err(),
            Error::mismatch(ContainerKind::Sequence, ContainerKind::Tuple),
        );
    }

    #[test]
    fn sink_stops_on_error() {
        struct Picky;

        impl KindStrategy<i32> for Picky {
            fn kind(&self) -> ContainerKind {
                ContainerKind::Sequence
            }

            fn empty(&self) -> Container<i32> {
                Container::Sequence(Vec::new())
            }

            fn accumulate(&self, container: &mut Container<i32>, item: i32) -> Result<()> {
                if item < 0 {
                    return Err(Error::invalid_argument("item", "negative"));
                }
                SequenceKind.accumulate(container, item)
            }

            fn combine(&self, container: &mut Container<i32>, other: Container<i32>) -> Result<()> {
                SequenceKind.combine(container, other)
            }
        }

        let registry = Registry::new().with(Picky).unwrap();
        let mut items = [1, -2, 3, 4].into_iter();
        let rebuilt = registry
            .sink(ContainerKind::Sequence)
            .unwrap()
            .collect_then_finish(&mut items);

        assert_eq!(
            rebuilt.unwrap_err(),
            Error::invalid_argument("item", "negative")
        );
        // Stopped right after the failing item.
        assert!(items.eq([3, 4]));
    }

    #[test]
    fn registrations_are_logged() {
        let logs = capture_logs(|| {
            let mut registry = Registry::basic();
            registry.register(ring()).unwrap();
            registry.register(ring()).unwrap();
        });
        let registered = logs
            .lines()
            .filter(|line| line.contains("registered container kind"))
            .collect::<Vec<_>>();

        assert_eq!(registered.len(), 2, "{logs:?}");
        assert!(registered.iter().all(|line| line.starts_with("DEBUG")));
        assert!(registered.iter().all(|line| line.contains("kind=ring3")));
        assert!(registered[0].contains("replaced=false"));
        assert!(registered[1].contains("replaced=true"));
    }

    #[test]
    fn replacing_a_strategy() {
        let mut registry = Registry::basic();
        registry.register(ring()).unwrap();
        registry
            .register(CustomKind::new(RING, |ring: &mut Vec<i32>, item| {
                ring.insert(0, item)
            }))
            .unwrap();

        let reversed = registry.collector(RING.into()).unwrap().collect([1, 2, 3]);
        assert!(reversed.unwrap().into_iter().eq([3, 2, 1]));
        assert_eq!(registry.kinds().count(), 3);
    }
}
