//! Iterators over the elements of a [`SortedContainer`](super::SortedContainer).
//!
//! Both iterators yield elements by value in ascending order.

use std::iter::FusedIterator;

use crate::numeric::Numeric;

/// Borrowing iterator over a sorted container, yielding copies of its elements.
///
/// Created by [`SortedContainer::iter`](super::SortedContainer::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<T: Numeric> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Numeric> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl<T: Numeric> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Numeric> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a sorted container.
///
/// Created by the [`IntoIterator`] implementation of
/// [`SortedContainer`](super::SortedContainer).
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl<T: Numeric> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Numeric> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T: Numeric> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Numeric> FusedIterator for IntoIter<T> {}
