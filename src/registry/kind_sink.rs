use std::{
    fmt::{self, Debug},
    ops::ControlFlow,
};

use crate::{
    container::Container,
    error::{Error, Result},
    sink::{Sink, SinkBase},
};

use super::KindStrategy;

/// A [`Sink`] that rebuilds a container through a [`KindStrategy`].
///
/// Its [`Output`](SinkBase::Output) is the rebuilt container, or the first
/// error the strategy reported. It stops accepting items right after an error.
///
/// This `struct` is created by [`Registry::sink()`](super::Registry::sink).
pub struct KindSink<'r, T> {
    strategy: &'r (dyn KindStrategy<T> + Send + Sync),
    container: Container<T>,
    error: Option<Error>,
}

impl<'r, T> KindSink<'r, T> {
    pub(crate) fn new(strategy: &'r (dyn KindStrategy<T> + Send + Sync)) -> Result<Self> {
        let container = strategy.empty();
        // A supplier of another kind would make every later item fail.
        if container.kind() != strategy.kind() {
            return Err(Error::mismatch(strategy.kind(), container.kind()));
        }

        Ok(Self {
            strategy,
            container,
            error: None,
        })
    }
}

impl<T> SinkBase for KindSink<'_, T> {
    type Output = Result<Container<T>>;

    #[inline]
    fn finish(self) -> Self::Output {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.container),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.error.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T> Sink<T> for KindSink<'_, T> {
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.error.is_some() {
            return ControlFlow::Break(());
        }

        match self.strategy.accumulate(&mut self.container, item) {
            Ok(()) => ControlFlow::Continue(()),
            Err(error) => {
                self.error = Some(error);
                ControlFlow::Break(())
            }
        }
    }
}

impl<T: Debug> Debug for KindSink<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindSink")
            .field("kind", &self.strategy.kind())
            .field("container", &self.container)
            .field("error", &self.error)
            .finish()
    }
}
