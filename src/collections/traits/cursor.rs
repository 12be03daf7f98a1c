use crate::util::error::{IllegalCursorState, NoMoreElements};

/// A forward-only traversal over a collection which can remove the element it last returned.
///
/// A Cursor starts before the first element. Each call to [`next`](Cursor::next) advances it by
/// one element and returns that element, which then becomes the [`current`](Cursor::current) one.
/// [`remove`](Cursor::remove) takes the current element out of the collection, after which the
/// following call to `next` continues with the element that came after it.
///
/// Cursors hold a mutable borrow of their collection, so the collection can't be changed through
/// any other channel while a Cursor is alive.
pub trait Cursor<T> {
    /// Returns true if a call to [`next`](Cursor::next) would succeed.
    fn has_next(&self) -> bool;

    /// Advances the Cursor and returns the element it moved onto.
    fn next(&mut self) -> Result<&T, NoMoreElements>;

    /// Removes the element most recently returned by [`next`](Cursor::next) from the underlying
    /// collection and returns it.
    ///
    /// Fails if `next` hasn't been called yet or if the current element was already removed.
    fn remove(&mut self) -> Result<T, IllegalCursorState>;

    /// Returns the element most recently returned by [`next`](Cursor::next).
    fn current(&self) -> Result<&T, IllegalCursorState>;
}
