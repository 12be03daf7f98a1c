use std::error::Error;

use super::{Cursor, Equivalence};

/// The root contract of all collections in this crate.
///
/// Implementors provide a small required core: [`len`](Collection::len), a borrowing
/// [`iter`](Collection::iter), a removing [`cursor`](Collection::cursor), their
/// [`equivalence`](Collection::equivalence) and [`offer`](Collection::offer). Everything else is
/// provided in terms of those methods, and may be overridden where a collection can do better.
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>: Cursor<T>
    where
        Self: 'a;

    type Equivalence: Equivalence<T>;

    type OfferError: Error;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns an iterator over references to every element in the collection. The order is the
    /// same as that of [`cursor`](Collection::cursor).
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// Returns a [`Cursor`] positioned before the first element.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Returns the equality used to search the collection.
    fn equivalence(&self) -> &Self::Equivalence;

    /// Inserts `value` according to the collection's own insertion rules. Returns `Ok(false)` if
    /// the collection declined the value without that being an error.
    fn offer(&mut self, value: T) -> Result<bool, Self::OfferError>;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an element equivalent to `item` is present.
    fn contains(&self, item: &T) -> bool {
        let equivalence = self.equivalence();
        self.iter().any(|element| equivalence.equivalent(element, item))
    }

    /// Returns true if every element of `other` is contained in `self`.
    fn contains_all<C: Collection<T> + ?Sized>(&self, other: &C) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Copies every element into a new [`Vec`], in iteration order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes the first element equivalent to `item`, returning true if one was found.
    fn remove(&mut self, item: &T) -> bool {
        let position = {
            let equivalence = self.equivalence();
            self.iter().position(|element| equivalence.equivalent(element, item))
        };

        let Some(position) = position else {
            return false;
        };

        let mut cursor = self.cursor();
        for _ in 0..=position {
            if cursor.next().is_err() {
                return false;
            }
        }
        cursor.remove().is_ok()
    }

    /// Removes every element for which `filter` returns true. Returns true if anything was
    /// removed.
    fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut filter: F) -> bool {
        let mut cursor = self.cursor();
        let mut removed = false;

        while cursor.has_next() {
            let matches = match cursor.next() {
                Ok(element) => filter(element),
                Err(_) => break,
            };
            if matches && cursor.remove().is_ok() {
                removed = true;
            }
        }
        removed
    }

    /// Removes every element that is also contained in `other`.
    fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        self.remove_if(|element| other.contains(element))
    }

    /// Removes every element that is not contained in `other`.
    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        self.remove_if(|element| !other.contains(element))
    }

    /// Offers a clone of every element in `other`, in `other`'s iteration order. Returns true if
    /// `self` changed.
    ///
    /// Adding a collection to itself can't be expressed, as `self` is borrowed mutably.
    fn add_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> Result<bool, Self::OfferError>
    where
        T: Clone,
    {
        self.offer_all(other.iter().cloned())
    }

    /// Offers every item produced by `items`, stopping at the first error.
    fn offer_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<bool, Self::OfferError> {
        let mut modified = false;
        for item in items {
            if self.offer(item)? {
                modified = true;
            }
        }
        Ok(modified)
    }

    /// Removes every element.
    fn clear(&mut self) {
        self.remove_if(|_| true);
    }
}
