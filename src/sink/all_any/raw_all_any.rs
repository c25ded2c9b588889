use std::ops::ControlFlow;

// Shared state of `All` (`ALL = true`) and `Any` (`ALL = false`).
//
// An item decides the outcome when the predicate answers `!ALL` for it:
// `false` for `All`, `true` for `Any`. Until then the output is `ALL`.
#[derive(Clone)]
pub(super) struct RawAllAny<F, const ALL: bool> {
    pred: F,
    decided: bool,
}

impl<F, const ALL: bool> RawAllAny<F, ALL> {
    #[inline]
    pub const fn new(pred: F) -> Self {
        Self {
            pred,
            decided: false,
        }
    }

    #[inline]
    pub const fn get(&self) -> bool {
        self.decided != ALL
    }

    #[inline]
    pub fn break_hint(&self) -> ControlFlow<()> {
        if self.decided {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub fn test<T>(&mut self, item: T) -> ControlFlow<()>
    where
        F: FnMut(T) -> bool,
    {
        if !self.decided {
            self.decided = (self.pred)(item) != ALL;
        }
        self.break_hint()
    }

    pub fn test_many<T>(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        F: FnMut(T) -> bool,
    {
        if !self.decided {
            // `any` stops right at the deciding item.
            self.decided = items.into_iter().any(|item| (self.pred)(item) != ALL);
        }
        self.break_hint()
    }

    pub fn test_then_finish<T>(mut self, items: impl IntoIterator<Item = T>) -> bool
    where
        F: FnMut(T) -> bool,
    {
        let _ = self.test_many(items);
        self.get()
    }

    pub fn fmt_as(&self, name: &str, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The predicate is a closure, so only the outcome so far is shown.
        f.debug_struct(name)
            .field("outcome", &self.get())
            .field("decided", &self.decided)
            .finish()
    }
}
