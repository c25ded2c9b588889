use std::{
    fmt::{self, Debug},
    sync::Arc,
};

use crate::{
    container::Container,
    error::Result,
    kind::ContainerKind,
    registry::{KindSink, KindStrategy},
    sink::Sink,
};

use super::Collect;

/// A collector backed by the [`KindStrategy`] of one kind.
///
/// Its output is a [`Container`] of that kind, or the first error the
/// strategy reported.
///
/// This `struct` is created by [`Registry::collector()`](crate::Registry::collector).
///
/// # Examples
///
/// ```
/// use better_stream::{prelude::*, ContainerKind, Registry};
///
/// let to_tuple = Registry::<u8>::basic().collector(ContainerKind::Tuple)?;
/// let tuple = to_tuple.collect([1, 2, 3])?;
///
/// assert_eq!(tuple.kind(), ContainerKind::Tuple);
/// assert_eq!(tuple.len(), 3);
/// # Ok::<(), better_stream::Error>(())
/// ```
pub struct KindCollector<T> {
    strategy: Arc<dyn KindStrategy<T> + Send + Sync>,
}

impl<T> KindCollector<T> {
    pub(crate) fn new(strategy: Arc<dyn KindStrategy<T> + Send + Sync>) -> Self {
        Self { strategy }
    }

    /// Returns the kind of the containers this collector builds.
    #[inline]
    pub fn kind(&self) -> ContainerKind {
        self.strategy.kind()
    }
}

impl<T> Collect<T> for KindCollector<T> {
    type Output = Result<Container<T>>;

    fn collect<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
    {
        KindSink::new(&*self.strategy)?.collect_then_finish(items)
    }
}

impl<T> Clone for KindCollector<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<T> Debug for KindCollector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindCollector")
            .field("kind", &self.kind())
            .finish()
    }
}
