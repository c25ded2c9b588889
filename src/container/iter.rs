use std::{iter::FusedIterator, slice, vec};

use indexmap::set;

use super::{Container, Segment};

/// An owning iterator over the items of a [`Container`].
///
/// This `struct` is created by [`Container::into_iter()`].
#[derive(Debug)]
pub struct IntoIter<T> {
    front: SegmentIntoIter<T>,
    rest: vec::IntoIter<Segment<T>>,
    remaining: usize,
}

#[derive(Debug)]
enum SegmentIntoIter<T> {
    Items(vec::IntoIter<T>),
    Set(set::IntoIter<T>),
}

impl<T> IntoIter<T> {
    pub(super) fn new(container: Container<T>) -> Self {
        let remaining = container.len();
        let (front, rest) = match container {
            Container::Sequence(items) | Container::Tuple(items) | Container::Custom(_, items) => {
                (Segment::Items(items), Vec::new())
            }
            Container::Set(items) => (Segment::Set(items), Vec::new()),
            Container::Chain(concat) => (Segment::Items(Vec::new()), concat.segments),
        };

        Self {
            front: front.into(),
            rest: rest.into_iter(),
            remaining,
        }
    }
}

impl<T> From<Segment<T>> for SegmentIntoIter<T> {
    #[inline]
    fn from(segment: Segment<T>) -> Self {
        match segment {
            Segment::Items(items) => Self::Items(items.into_iter()),
            Segment::Set(items) => Self::Set(items.into_iter()),
        }
    }
}

impl<T> Iterator for SegmentIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self {
            Self::Items(items) => items.next(),
            Self::Set(items) => items.next(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.front.next() {
                self.remaining -= 1;
                return Some(item);
            }

            self.front = self.rest.next()?.into();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A borrowing iterator over the items of a [`Container`].
///
/// This `struct` is created by [`Container::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    front: SegmentIter<'a, T>,
    rest: slice::Iter<'a, Segment<T>>,
    remaining: usize,
}

#[derive(Debug, Clone)]
enum SegmentIter<'a, T> {
    Items(slice::Iter<'a, T>),
    Set(set::Iter<'a, T>),
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(container: &'a Container<T>) -> Self {
        let (front, rest) = match container {
            Container::Sequence(items) | Container::Tuple(items) | Container::Custom(_, items) => {
                (SegmentIter::Items(items.iter()), slice::Iter::default())
            }
            Container::Set(items) => (SegmentIter::Set(items.iter()), slice::Iter::default()),
            Container::Chain(concat) => (
                SegmentIter::Items(slice::Iter::default()),
                concat.segments.iter(),
            ),
        };

        Self {
            front,
            rest,
            remaining: container.len(),
        }
    }
}

impl<'a, T> From<&'a Segment<T>> for SegmentIter<'a, T> {
    #[inline]
    fn from(segment: &'a Segment<T>) -> Self {
        match segment {
            Segment::Items(items) => Self::Items(items.iter()),
            Segment::Set(items) => Self::Set(items.iter()),
        }
    }
}

impl<'a, T> Iterator for SegmentIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Items(items) => items.next(),
            Self::Set(items) => items.next(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.front.next() {
                self.remaining -= 1;
                return Some(item);
            }

            self.front = self.rest.next()?.into();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
