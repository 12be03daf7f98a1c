use std::cmp::Ordering;

/// A three-way ordering function, used to sort lists and to order priority queues.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a Comparator, as are [`Natural`] (for types
/// implementing [`Ord`]) and [`Reversed`], which flips another Comparator.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns a Comparator which orders elements in the opposite direction to `self`.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Shorthand for `self.compare(a, b) == Ordering::Less`.
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Shorthand for `self.compare(a, b) == Ordering::Greater`.
    fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Orders elements by their [`Ord`] implementation, smallest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl Natural {
    /// Returns the largest-first ordering.
    pub const fn reversed(self) -> Reversed<Natural> {
        Reversed(self)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the contained Comparator. Created with [`Comparator::reversed`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Unwraps the original ordering.
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
