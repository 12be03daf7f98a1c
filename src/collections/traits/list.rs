use std::cmp::Ordering;

use super::{Collection, Comparator, Equivalence};
use crate::util::error::{IllegalRange, IndexOutOfBounds, ListError, UnsupportedOperation};

/// An ordered collection with positional access.
///
/// Positional mutation ([`try_set`](List::try_set), [`try_insert`](List::try_insert) and
/// [`try_remove_at`](List::try_remove_at)) is optional: the default implementations fail with
/// [`UnsupportedOperation`].
pub trait List<T>: Collection<T> {
    /// Returns a reference to the element at `index`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Sorts the list according to `compare`. The sort is stable: elements which compare as equal
    /// keep their relative order.
    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F);

    /// Returns a new, independent list holding clones of the elements in `from..to`.
    fn sub_list(&self, from: usize, to: usize) -> Result<Self, IllegalRange>
    where
        Self: Sized,
        T: Clone;

    /// Replaces the element at `index`, returning the old one.
    fn try_set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let _ = (index, value);
        Err(UnsupportedOperation { operation: "set" }.into())
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let _ = (index, value);
        Err(UnsupportedOperation { operation: "insert" }.into())
    }

    /// Removes and returns the element at `index`, shifting later elements forward.
    fn try_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let _ = index;
        Err(UnsupportedOperation { operation: "remove_at" }.into())
    }

    /// Sorts the list with a [`Comparator`].
    fn sort_with<C: Comparator<T> + ?Sized>(&mut self, comparator: &C) {
        self.sort_by(|a, b| comparator.compare(a, b));
    }

    /// Returns the index of the first element equivalent to `item`.
    fn index_of(&self, item: &T) -> Option<usize> {
        let equivalence = self.equivalence();
        self.iter().position(|element| equivalence.equivalent(element, item))
    }

    /// Returns the index of the last element equivalent to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize> {
        let equivalence = self.equivalence();
        self.iter()
            .enumerate()
            .filter(|(_, element)| equivalence.equivalent(element, item))
            .map(|(index, _)| index)
            .last()
    }

    /// Checks that `from..to` is a valid range of this list.
    fn check_bounds(&self, from: usize, to: usize) -> Result<(), IllegalRange> {
        let len = self.len();
        if from > to || to > len {
            Err(IllegalRange { from, to, len })
        } else {
            Ok(())
        }
    }
}
