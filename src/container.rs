//! [`Container`]: the working collection of a pipeline, tagged with its kind.

mod iter;

pub use iter::*;

use std::{
    collections::{BTreeSet, HashSet},
    hash::Hash,
};

use indexmap::IndexSet;

use crate::kind::{ContainerKind, KindId};

/// A collection tagged with its [`ContainerKind`].
///
/// The variant is the kind. Storage is plain `std`/`indexmap` data, so
/// callers may build and take apart containers freely; the only exception is
/// [`Chain`](Container::Chain), which is built by [`Container::concat()`].
///
/// # Examples
///
/// ```
/// use better_stream::{Container, ContainerKind};
///
/// let chained = Container::concat(vec![1, 2].into(), [3].into());
///
/// assert_eq!(chained.kind(), ContainerKind::Chain);
/// assert_eq!(chained.len(), 3);
/// assert!(chained.into_iter().eq([1, 2, 3]));
/// ```
#[derive(Debug, Clone)]
pub enum Container<T> {
    /// See [`ContainerKind::Sequence`].
    Sequence(Vec<T>),
    /// See [`ContainerKind::Set`].
    Set(IndexSet<T>),
    /// See [`ContainerKind::Tuple`].
    Tuple(Vec<T>),
    /// See [`ContainerKind::Custom`]. Items are kept in iteration order.
    Custom(KindId, Vec<T>),
    /// See [`ContainerKind::Chain`].
    Chain(Concat<T>),
}

impl<T> Container<T> {
    /// Creates the lazy concatenation of `a` followed by `b`.
    ///
    /// No item is moved or copied; both containers become segments of the
    /// chain. The two sides do not need to share a kind.
    pub fn concat(a: Self, b: Self) -> Self {
        let mut concat = Concat::default();
        concat.push(a);
        concat.push(b);
        Self::Chain(concat)
    }

    /// Returns the kind of this container.
    #[inline]
    pub const fn kind(&self) -> ContainerKind {
        match self {
            Self::Sequence(_) => ContainerKind::Sequence,
            Self::Set(_) => ContainerKind::Set,
            Self::Tuple(_) => ContainerKind::Tuple,
            Self::Custom(id, _) => ContainerKind::Custom(*id),
            Self::Chain(_) => ContainerKind::Chain,
        }
    }

    /// Returns the number of items in the container.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) | Self::Tuple(items) | Self::Custom(_, items) => items.len(),
            Self::Set(items) => items.len(),
            Self::Chain(concat) => concat.len(),
        }
    }

    /// Returns `true` if the container holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items, in the kind's iteration order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Container<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Container<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::Tuple(Vec::from(items))
    }
}

impl<T> From<IndexSet<T>> for Container<T> {
    #[inline]
    fn from(items: IndexSet<T>) -> Self {
        Self::Set(items)
    }
}

impl<T: Hash + Eq> From<HashSet<T>> for Container<T> {
    fn from(items: HashSet<T>) -> Self {
        Self::Set(items.into_iter().collect())
    }
}

impl<T: Hash + Eq> From<BTreeSet<T>> for Container<T> {
    fn from(items: BTreeSet<T>) -> Self {
        Self::Set(items.into_iter().collect())
    }
}

impl<T> From<Concat<T>> for Container<T> {
    #[inline]
    fn from(concat: Concat<T>) -> Self {
        Self::Chain(concat)
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The storage of a [`Chain`](Container::Chain) container.
///
/// Segments are never chains themselves: concatenating a chain splices its
/// segments in place.
#[derive(Debug, Clone)]
pub struct Concat<T> {
    segments: Vec<Segment<T>>,
    len: usize,
}

#[derive(Debug, Clone)]
pub(crate) enum Segment<T> {
    Items(Vec<T>),
    Set(IndexSet<T>),
}

impl<T> Concat<T> {
    /// Returns the total number of items across all segments.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no segment holds an item.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, container: Container<T>) {
        let segment = match container {
            Container::Sequence(items) | Container::Tuple(items) | Container::Custom(_, items) => {
                Segment::Items(items)
            }
            Container::Set(items) => Segment::Set(items),
            Container::Chain(concat) => {
                self.len += concat.len;
                self.segments.extend(concat.segments);
                return;
            }
        };

        self.len += segment.len();
        self.segments.push(segment);
    }
}

impl<T> Default for Concat<T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Segment<T> {
    fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Set(items) => items.len(),
        }
    }
}
