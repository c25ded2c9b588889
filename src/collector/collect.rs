/// Reduces a finite sequence of items into a result.
///
/// This is what [`Pipeline::collect()`](crate::Pipeline::collect) hands its
/// items to.
pub trait Collect<T> {
    /// What the reduction yields.
    type Output;

    /// Reduces `items`, in order, into the output.
    fn collect<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>;
}

impl<T, C> Collect<T> for &C
where
    C: Collect<T>,
{
    type Output = C::Output;

    #[inline]
    fn collect<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
    {
        C::collect(self, items)
    }
}
