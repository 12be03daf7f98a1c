//! Error types shared by all collections.
//!
//! Each failure condition is its own (mostly tiny) struct implementing [`Error`]. Operations which
//! can fail for more than one reason return an enum over those structs instead, so that `?` can
//! convert between them and callers can match on the exact cause.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An element was required, but the collection contains none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No such element: the collection is empty!")]
pub struct EmptyCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A `from..to` range which isn't contained in `0..=len` or runs backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalRange {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

impl Display for IllegalRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.from > self.to {
            write!(f, "Illegal range {}..{}: start can not be after end!", self.from, self.to)
        } else {
            write!(
                f,
                "Illegal range {}..{} for collection with {} elements!",
                self.from, self.to, self.len
            )
        }
    }
}

impl Error for IllegalRange {}

/// An insertion into a bounded list which is already holding its maximum number of elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity exceeded: collection is limited to {max} elements!")]
pub struct CapacityExceeded {
    pub max: usize,
}

/// An insertion into a priority queue which is already full.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue is full: capacity of {capacity} elements reached!")]
pub struct QueueFull {
    pub capacity: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unsupported operation: {operation}!")]
pub struct UnsupportedOperation {
    pub operation: &'static str,
}

/// A malformed call, such as configuring a capacity of zero or passing a node handle which no
/// longer refers to a linked node.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Illegal arguments: {reason}!")]
pub struct IllegalArguments {
    pub reason: &'static str,
}

/// A cursor was asked for its next element after it had already been exhausted.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No more elements!")]
pub struct NoMoreElements;

/// A cursor method was called in an order that its state machine doesn't allow.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum IllegalCursorState {
    /// `next` hasn't been called yet.
    #[display("Illegal cursor state: no element has been returned yet!")]
    NoCurrent,
    /// The element last returned has already been removed.
    #[display("Illegal cursor state: the current element has already been removed!")]
    AlreadyRemoved,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityExceeded(CapacityExceeded),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum NodeInsertError {
    IllegalArguments(IllegalArguments),
    CapacityExceeded(CapacityExceeded),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityExceeded(CapacityExceeded),
    UnsupportedOperation(UnsupportedOperation),
}

impl From<InsertError> for ListError {
    fn from(value: InsertError) -> Self {
        match value {
            InsertError::IndexOutOfBounds(e) => e.into(),
            InsertError::CapacityExceeded(e) => e.into(),
        }
    }
}

/// Unwrapping for the panicking flavours of fallible methods, such as [`LinkedList::get`] next to
/// [`LinkedList::try_get`].
///
/// [`LinkedList::get`]: crate::collections::linked::LinkedList::get
/// [`LinkedList::try_get`]: crate::collections::linked::LinkedList::try_get
pub(crate) trait Throw<T> {
    /// Like [`Result::unwrap`], but panics with the error's [`Display`] message instead of its
    /// `Debug` form.
    ///
    /// # Panics
    /// Panics if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
