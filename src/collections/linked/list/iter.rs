use std::iter::FusedIterator;

use super::{Arena, LinkedList, Link};

impl<T, E> IntoIterator for LinkedList<T, E> {
    type Item = T;

    type IntoIter = IntoIter<T, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owning iterator over the elements of a [`LinkedList`], front to back.
pub struct IntoIter<T, E> {
    pub(crate) list: LinkedList<T, E>,
}

impl<T, E> Iterator for IntoIter<T, E> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.poll_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, E> DoubleEndedIterator for IntoIter<T, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.poll_last()
    }
}

impl<T, E> ExactSizeIterator for IntoIter<T, E> {}

impl<T, E> FusedIterator for IntoIter<T, E> {}

impl<'a, T, E> IntoIterator for &'a LinkedList<T, E> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = self.link_range();
        Iter {
            nodes: &self.nodes,
            front,
            back,
            remaining: self.len(),
        }
    }
}

/// A borrowing iterator over the elements of a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Arena<T>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.nodes.next(index);
        self.remaining -= 1;
        Some(self.nodes.value(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.nodes.prev(index);
        self.remaining -= 1;
        Some(self.nodes.value(index))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
