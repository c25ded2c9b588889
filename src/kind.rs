//! Container kinds: the tag that decides how a container is rebuilt.

use std::fmt::{self, Display};

/// The structural category of a [`Container`](crate::Container).
///
/// The kind is carried next to the storage, and pipelines look it up in a
/// [`Registry`](crate::Registry) to learn how to build an empty container of
/// the same kind and add items to it.
///
/// # Examples
///
/// ```
/// use better_stream::{Container, ContainerKind};
///
/// assert_eq!(Container::from(vec![1, 2]).kind(), ContainerKind::Sequence);
/// assert_eq!(Container::from([1, 2]).kind(), ContainerKind::Tuple);
/// assert_eq!(ContainerKind::Set.to_string(), "set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// An ordered, growable sequence.
    Sequence,
    /// Unique items, iterated in insertion order.
    Set,
    /// A fixed-length ordered sequence, built by the caller from an array.
    Tuple,
    /// The lazy concatenation produced by [`Pipeline::concat()`](crate::Pipeline::concat).
    ///
    /// This kind is never registered: it only iterates.
    Chain,
    /// A kind defined by the caller.
    Custom(KindId),
}

impl ContainerKind {
    /// Returns the name this kind displays as.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Tuple => "tuple",
            Self::Chain => "chain",
            Self::Custom(id) => id.name(),
        }
    }
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a [custom](ContainerKind::Custom) container kind.
///
/// Two ids are the same kind iff their names are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(&'static str);

impl KindId {
    /// Creates an id from its name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the name of this id.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<KindId> for ContainerKind {
    #[inline]
    fn from(id: KindId) -> Self {
        Self::Custom(id)
    }
}
