use std::{
    fmt::{self, Debug},
    hash::Hash,
};

use crate::{
    container::Container,
    error::{Error, Result},
    kind::{ContainerKind, KindId},
};

/// How to build, grow, and merge containers of one [`ContainerKind`].
///
/// A strategy only works on containers of its own kind: handing it any
/// other container fails with [`Error::KindMismatch`].
///
/// # Implementing
///
/// Most custom kinds only need [`CustomKind`], which derives everything from
/// one closure. Implement this trait directly when the merge of two
/// containers can be done better than re-adding every item.
pub trait KindStrategy<T> {
    /// The kind this strategy works on.
    fn kind(&self) -> ContainerKind;

    /// Returns a fresh, empty container of the kind.
    fn empty(&self) -> Container<T>;

    /// Adds one item, keeping the container of the same kind.
    fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()>;

    /// Merges `other` into `container`. Both must be of the strategy's kind.
    fn combine(&self, container: &mut Container<T>, other: Container<T>) -> Result<()>;
}

/// The strategy for [`ContainerKind::Sequence`]: push, and append on merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceKind;

/// The strategy for [`ContainerKind::Set`]: insert, and union on merge.
///
/// Inserting an item already present keeps the first occurrence and its position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetKind;

/// The strategy for [`ContainerKind::Tuple`]: push, and append on merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleKind;

impl<T> KindStrategy<T> for SequenceKind {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::Sequence
    }

    #[inline]
    fn empty(&self) -> Container<T> {
        Container::Sequence(Vec::new())
    }

    fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()> {
        match container {
            Container::Sequence(items) => {
                items.push(item);
                Ok(())
            }
            other => Err(Error::mismatch(ContainerKind::Sequence, other.kind())),
        }
    }

    fn combine(&self, container: &mut Container<T>, other: Container<T>) -> Result<()> {
        match (container, other) {
            (Container::Sequence(items), Container::Sequence(more)) => {
                items.extend(more);
                Ok(())
            }
            (container, other) => Err(combine_mismatch(ContainerKind::Sequence, container, &other)),
        }
    }
}

impl<T: Hash + Eq> KindStrategy<T> for SetKind {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::Set
    }

    #[inline]
    fn empty(&self) -> Container<T> {
        Container::Set(Default::default())
    }

    fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()> {
        match container {
            Container::Set(items) => {
                // `false` only means the item was there already.
                items.insert(item);
                Ok(())
            }
            other => Err(Error::mismatch(ContainerKind::Set, other.kind())),
        }
    }

    fn combine(&self, container: &mut Container<T>, other: Container<T>) -> Result<()> {
        match (container, other) {
            (Container::Set(items), Container::Set(more)) => {
                items.extend(more);
                Ok(())
            }
            (container, other) => Err(combine_mismatch(ContainerKind::Set, container, &other)),
        }
    }
}

impl<T> KindStrategy<T> for TupleKind {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::Tuple
    }

    #[inline]
    fn empty(&self) -> Container<T> {
        Container::Tuple(Vec::new())
    }

    fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()> {
        match container {
            Container::Tuple(items) => {
                items.push(item);
                Ok(())
            }
            other => Err(Error::mismatch(ContainerKind::Tuple, other.kind())),
        }
    }

    fn combine(&self, container: &mut Container<T>, other: Container<T>) -> Result<()> {
        match (container, other) {
            (Container::Tuple(items), Container::Tuple(more)) => {
                items.extend(more);
                Ok(())
            }
            (container, other) => Err(combine_mismatch(ContainerKind::Tuple, container, &other)),
        }
    }
}

/// A strategy for a [custom](ContainerKind::Custom) kind, built from a closure
/// that adds one item to the kind's ordered buffer.
///
/// Merging feeds every item of the other container through the same closure, in order.
///
/// # Examples
///
/// A priority queue that keeps its items sorted, largest first:
///
/// ```
/// use better_stream::{Container, CustomKind, KindId, KindStrategy};
///
/// const PRIORITY_QUEUE: KindId = KindId::new("priority_queue");
///
/// let strategy = CustomKind::new(PRIORITY_QUEUE, |queue: &mut Vec<i32>, item| {
///     let at = queue.partition_point(|&queued| queued >= item);
///     queue.insert(at, item);
/// });
///
/// let mut queue = strategy.empty();
/// for item in [3, 9, 1, 4] {
///     strategy.accumulate(&mut queue, item).unwrap();
/// }
///
/// assert!(queue.into_iter().eq([9, 4, 3, 1]));
/// ```
#[derive(Clone)]
pub struct CustomKind<F> {
    id: KindId,
    accumulate: F,
}

impl<F> CustomKind<F> {
    /// Creates a strategy for the kind `id`, adding items with `accumulate`.
    #[inline]
    pub const fn new<T>(id: KindId, accumulate: F) -> Self
    where
        F: Fn(&mut Vec<T>, T),
    {
        Self { id, accumulate }
    }

    /// Returns the id of the kind.
    #[inline]
    pub const fn id(&self) -> KindId {
        self.id
    }
}

impl<T, F> KindStrategy<T> for CustomKind<F>
where
    F: Fn(&mut Vec<T>, T),
{
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::Custom(self.id)
    }

    #[inline]
    fn empty(&self) -> Container<T> {
        Container::Custom(self.id, Vec::new())
    }

    fn accumulate(&self, container: &mut Container<T>, item: T) -> Result<()> {
        match container {
            Container::Custom(id, items) if *id == self.id => {
                (self.accumulate)(items, item);
                Ok(())
            }
            other => Err(Error::mismatch(ContainerKind::Custom(self.id), other.kind())),
        }
    }

    fn combine(&self, container: &mut Container<T>, other: Container<T>) -> Result<()> {
        match (container, other) {
            (Container::Custom(id, items), Container::Custom(other_id, more))
                if *id == self.id && other_id == self.id =>
            {
                for item in more {
                    (self.accumulate)(items, item);
                }
                Ok(())
            }
            (container, other) => Err(combine_mismatch(
                ContainerKind::Custom(self.id),
                container,
                &other,
            )),
        }
    }
}

impl<F> Debug for CustomKind<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomKind").field("id", &self.id).finish()
    }
}

// Reports whichever side is not of the expected kind.
fn combine_mismatch<T>(
    expected: ContainerKind,
    container: &Container<T>,
    other: &Container<T>,
) -> Error {
    let found = if container.kind() == expected {
        other.kind()
    } else {
        container.kind()
    };

    Error::mismatch(expected, found)
}
