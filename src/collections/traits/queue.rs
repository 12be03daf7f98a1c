use super::Collection;
use crate::util::error::EmptyCollection;

/// A collection with a distinguished head element.
pub trait Queue<T>: Collection<T> {
    /// Removes and returns the head of the queue, or [`None`] if it is empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns the head of the queue without removing it, or [`None`] if it is empty.
    fn peek(&self) -> Option<&T>;

    /// Like [`peek`](Queue::peek), but fails with [`EmptyCollection`] rather than returning
    /// [`None`].
    fn element(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }
}
