use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::num::NonZero;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;
use tracing::{debug, trace};

use super::{Arena, Iter, Length, Link, ListCursor, Node, NodeRef, ONE};
use crate::collections::traits::{Collection, Equivalence, List, Queue, ValueEq};
#[doc(inline)]
pub use crate::util::error::{
    CapacityExceeded, EmptyCollection, IllegalArguments, IllegalRange, IndexOutOfBounds,
    InsertError, ListError, NodeInsertError,
};
use crate::util::error::Throw;
use crate::util::fmt::{DebugEntries, write_elements};

const STALE_NODE: IllegalArguments = IllegalArguments {
    reason: "node is not linked in this list",
};

/// A list with links in both directions, which doubles as a stack, a queue and a deque. See also:
/// [`ListCursor`] for iteration with removal and [`NodeRef`] for `O(1)` splicing around a known
/// node.
///
/// A LinkedList can optionally be bounded to a maximum length, in which case insertions beyond it
/// are rejected: the `add_*`/`insert` family fails with [`CapacityExceeded`], while `add` and the
/// `offer_*` family return `false`.
///
/// Searching methods ([`contains`](Collection::contains), [`remove`](Collection::remove), ...)
/// compare elements with the list's [`Equivalence`], [`ValueEq`] unless another one was supplied
/// with [`LinkedList::with_equality`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get_first/last` | `O(1)` |
/// | `add_first/last` | `O(1)` |
/// | `remove_first/last` | `O(1)` |
/// | `add_before/after` | `O(1)` |
/// | `remove_node` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove_at` | `O(min(i, n-i))` |
/// | `set` | `O(min(i, n-i))` |
/// | `sort_by` | `O(n log n)` |
/// | `sub_list` | `O(n)` |
/// | `contains` | `O(n)` |
#[derive(Clone)]
pub struct LinkedList<T, E = ValueEq> {
    pub(crate) state: ListState,
    pub(crate) nodes: Arena<T>,
    pub(crate) max_len: Option<NonZero<usize>>,
    pub(crate) equivalence: E,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: usize,
    pub tail: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, unbounded LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList::with_equality(ValueEq)
    }

    /// Creates a new LinkedList which holds at most `max_len` elements.
    ///
    /// Fails with [`IllegalArguments`] if `max_len` is zero.
    pub fn bounded(max_len: usize) -> Result<LinkedList<T>, IllegalArguments> {
        LinkedList::bounded_with_equality(max_len, ValueEq)
    }
}

impl<T, E> LinkedList<T, E> {
    /// Creates a new, unbounded LinkedList which searches for elements using `equivalence`.
    pub const fn with_equality(equivalence: E) -> LinkedList<T, E> {
        LinkedList {
            state: Empty,
            nodes: Arena::new(),
            max_len: None,
            equivalence,
        }
    }

    /// Creates a new LinkedList which holds at most `max_len` elements and searches for elements
    /// using `equivalence`.
    ///
    /// Fails with [`IllegalArguments`] if `max_len` is zero.
    pub fn bounded_with_equality(
        max_len: usize,
        equivalence: E,
    ) -> Result<LinkedList<T, E>, IllegalArguments> {
        let max_len = NonZero::new(max_len).ok_or(IllegalArguments {
            reason: "maximum length must be greater than zero",
        })?;
        Ok(LinkedList {
            max_len: Some(max_len),
            ..LinkedList::with_equality(equivalence)
        })
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the maximum length of the LinkedList, or [`None`] if it is unbounded.
    pub const fn max_len(&self) -> Option<usize> {
        match self.max_len {
            Some(max) => Some(max.get()),
            None => None,
        }
    }

    /// Returns true if the LinkedList is bounded and holds as many elements as it may.
    pub const fn is_full(&self) -> bool {
        match self.max_len {
            Some(max) => self.len() >= max.get(),
            None => false,
        }
    }

    fn check_capacity(&self) -> Result<(), CapacityExceeded> {
        match self.max_len {
            Some(max) if self.len() >= max.get() => Err(CapacityExceeded { max: max.get() }),
            _ => Ok(()),
        }
    }

    /// Adds `value` to the front of the LinkedList, returning a handle to its node.
    pub fn add_first(&mut self, value: T) -> Result<NodeRef, CapacityExceeded> {
        self.check_capacity()?;
        let index = self.link_first(value);
        Ok(self.nodes.handle(index))
    }

    /// Adds `value` to the back of the LinkedList, returning a handle to its node.
    pub fn add_last(&mut self, value: T) -> Result<NodeRef, CapacityExceeded> {
        self.check_capacity()?;
        let index = self.link_last(value);
        Ok(self.nodes.handle(index))
    }

    /// Adds `value` to the back of the LinkedList. Returns false, dropping `value`, if the list is
    /// full.
    pub fn add(&mut self, value: T) -> bool {
        self.offer_last(value)
    }

    /// Pushes `value` onto the LinkedList when it is used as a stack. Equivalent to
    /// [`add_last`](LinkedList::add_last).
    pub fn push(&mut self, value: T) -> Result<NodeRef, CapacityExceeded> {
        self.add_last(value)
    }

    /// Adds `value` to the front of the LinkedList, returning false if the list is full.
    pub fn offer_first(&mut self, value: T) -> bool {
        match self.add_first(value) {
            Ok(_) => true,
            Err(CapacityExceeded { max }) => {
                debug!(max, "linked list rejected offer_first: at maximum length");
                false
            },
        }
    }

    /// Adds `value` to the back of the LinkedList, returning false if the list is full.
    pub fn offer_last(&mut self, value: T) -> bool {
        match self.add_last(value) {
            Ok(_) => true,
            Err(CapacityExceeded { max }) => {
                debug!(max, "linked list rejected offer_last: at maximum length");
                false
            },
        }
    }

    /// Adds `value` to the back of the LinkedList when it is used as a queue, returning false if
    /// the list is full.
    pub fn offer(&mut self, value: T) -> bool {
        self.offer_last(value)
    }

    /// Returns a reference to the first element.
    pub fn get_first(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(self.nodes.value(head)),
        }
    }

    /// Returns a reference to the last element.
    pub fn get_last(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => Ok(self.nodes.value(tail)),
        }
    }

    /// Equivalent to [`get_first`](LinkedList::get_first).
    pub fn peek_first(&self) -> Result<&T, EmptyCollection> {
        self.get_first()
    }

    /// Equivalent to [`get_last`](LinkedList::get_last).
    pub fn peek_last(&self) -> Result<&T, EmptyCollection> {
        self.get_last()
    }

    /// Returns a reference to the head of the LinkedList when it is used as a queue.
    pub fn element(&self) -> Result<&T, EmptyCollection> {
        self.get_first()
    }

    /// Returns a reference to the head of the LinkedList when it is used as a queue, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.get_first().ok()
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(self.nodes.value_mut(head)),
        }
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(self.nodes.value_mut(tail)),
        }
    }

    /// Removes the first element and returns it.
    pub fn remove_first(&mut self) -> Result<T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(self.unlink(head)),
        }
    }

    /// Removes the last element and returns it.
    pub fn remove_last(&mut self) -> Result<T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => Ok(self.unlink(tail)),
        }
    }

    /// Pops the top of the LinkedList when it is used as a stack. Equivalent to
    /// [`remove_last`](LinkedList::remove_last).
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.remove_last()
    }

    /// Removes the first element and returns it, if the list isn't empty.
    pub fn poll_first(&mut self) -> Option<T> {
        self.remove_first().ok()
    }

    /// Removes the last element and returns it, if the list isn't empty.
    pub fn poll_last(&mut self) -> Option<T> {
        self.remove_last().ok()
    }

    /// Removes the head of the LinkedList when it is used as a queue. Equivalent to
    /// [`poll_first`](LinkedList::poll_first).
    pub fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.nodes.value(self.checked_seek(index)?))
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.nodes.value_mut(node))
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.nodes.replace(node, value))
    }

    /// Inserts `value` so that it ends up at `index`. An `index` equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or if the list is full.
    pub fn insert(&mut self, index: usize, value: T) -> NodeRef {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<NodeRef, InsertError> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }
        self.check_capacity()?;

        let node = if index == len {
            self.link_last(value)
        } else {
            let at = self.seek(index);
            self.link_before(at, value)
        };
        Ok(self.nodes.handle(node))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Returns a handle to the first node.
    pub fn first_node(&self) -> Option<NodeRef> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(self.nodes.handle(head)),
        }
    }

    /// Returns a handle to the last node.
    pub fn last_node(&self) -> Option<NodeRef> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(self.nodes.handle(tail)),
        }
    }

    /// Returns a handle to the node at `index`.
    pub fn node_at(&self, index: usize) -> Result<NodeRef, IndexOutOfBounds> {
        Ok(self.nodes.handle(self.checked_seek(index)?))
    }

    /// Returns a handle to the node following `node`, or [`None`] if `node` is the last one or is
    /// no longer linked.
    pub fn next_node(&self, node: NodeRef) -> Option<NodeRef> {
        let next = self.nodes.next(self.nodes.resolve(node)?)?;
        Some(self.nodes.handle(next))
    }

    /// Returns a handle to the node preceding `node`, or [`None`] if `node` is the first one or is
    /// no longer linked.
    pub fn prev_node(&self, node: NodeRef) -> Option<NodeRef> {
        let prev = self.nodes.prev(self.nodes.resolve(node)?)?;
        Some(self.nodes.handle(prev))
    }

    /// Returns the element held by `node`, or [`None`] if it is no longer linked.
    pub fn value_of(&self, node: NodeRef) -> Option<&T> {
        Some(self.nodes.value(self.nodes.resolve(node)?))
    }

    /// Returns the element held by `node` mutably, or [`None`] if it is no longer linked.
    pub fn value_of_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let index = self.nodes.resolve(node)?;
        Some(self.nodes.value_mut(index))
    }

    /// Links `value` directly before `node`.
    pub fn add_before(&mut self, node: NodeRef, value: T) -> Result<NodeRef, NodeInsertError> {
        let at = self.nodes.resolve(node).ok_or(STALE_NODE)?;
        self.check_capacity()?;
        let index = self.link_before(at, value);
        Ok(self.nodes.handle(index))
    }

    /// Links `value` directly after `node`.
    pub fn add_after(&mut self, node: NodeRef, value: T) -> Result<NodeRef, NodeInsertError> {
        let at = self.nodes.resolve(node).ok_or(STALE_NODE)?;
        self.check_capacity()?;
        let index = self.link_after(at, value);
        Ok(self.nodes.handle(index))
    }

    /// Unlinks `node` and returns its element. The handle (and any copy of it) is stale afterwards.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<T, IllegalArguments> {
        let index = self.nodes.resolve(node).ok_or(STALE_NODE)?;
        Ok(self.unlink(index))
    }

    /// Returns a new, independent LinkedList holding clones of the elements in `from..to`. The new
    /// list is unbounded and shares this list's equivalence.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<LinkedList<T, E>, IllegalRange>
    where
        T: Clone,
        E: Clone,
    {
        let len = self.len();
        if from > to || to > len {
            return Err(IllegalRange { from, to, len });
        }
        trace!(from, to, len, "copying linked list range into a sub-list");

        let mut sub_list = LinkedList::with_equality(self.equivalence.clone());
        for value in self.iter().skip(from).take(to - from) {
            sub_list.link_last(value.clone());
        }
        Ok(sub_list)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.state = Empty;
        self.nodes.clear();
    }

    /// Returns a [`ListCursor`] positioned before the first element.
    pub fn cursor(&mut self) -> ListCursor<'_, T, E> {
        ListCursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the equivalence used to search this LinkedList.
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }
}

impl<T, E> LinkedList<T, E> {
    pub(crate) const fn link_range(&self) -> (Link, Link) {
        match self.state {
            Empty => (None, None),
            Full(ListContents { head, tail, .. }) => (Some(head), Some(tail)),
        }
    }

    pub(crate) fn link_first(&mut self, value: T) -> usize {
        match &mut self.state {
            Empty => self.link_only(value),
            Full(contents) => {
                let index = self.nodes.alloc(Node {
                    value,
                    prev: None,
                    next: Some(contents.head),
                });
                self.nodes.node_mut(contents.head).prev = Some(index);
                contents.head = index;
                contents.len = contents.len.incremented();
                index
            },
        }
    }

    pub(crate) fn link_last(&mut self, value: T) -> usize {
        match &mut self.state {
            Empty => self.link_only(value),
            Full(contents) => {
                let index = self.nodes.alloc(Node {
                    value,
                    prev: Some(contents.tail),
                    next: None,
                });
                self.nodes.node_mut(contents.tail).next = Some(index);
                contents.tail = index;
                contents.len = contents.len.incremented();
                index
            },
        }
    }

    fn link_only(&mut self, value: T) -> usize {
        let index = self.nodes.alloc(Node {
            value,
            prev: None,
            next: None,
        });
        self.state = Full(ListContents {
            len: ONE,
            head: index,
            tail: index,
        });
        index
    }

    /// Links `value` before the linked node `at`.
    pub(crate) fn link_before(&mut self, at: usize, value: T) -> usize {
        match self.nodes.prev(at) {
            None => self.link_first(value),
            Some(prev) => {
                let index = self.nodes.alloc(Node {
                    value,
                    prev: Some(prev),
                    next: Some(at),
                });
                self.nodes.node_mut(prev).next = Some(index);
                self.nodes.node_mut(at).prev = Some(index);
                self.grow();
                index
            },
        }
    }

    /// Links `value` after the linked node `at`.
    pub(crate) fn link_after(&mut self, at: usize, value: T) -> usize {
        match self.nodes.next(at) {
            None => self.link_last(value),
            Some(next) => {
                let index = self.nodes.alloc(Node {
                    value,
                    prev: Some(at),
                    next: Some(next),
                });
                self.nodes.node_mut(at).next = Some(index);
                self.nodes.node_mut(next).prev = Some(index);
                self.grow();
                index
            },
        }
    }

    /// Accounts for a node linked strictly between two others.
    fn grow(&mut self) {
        if let Full(contents) = &mut self.state {
            contents.len = contents.len.incremented();
        }
    }

    /// Unlinks the node at `index`, splicing its neighbours together, and returns its value.
    pub(crate) fn unlink(&mut self, index: usize) -> T {
        let node = self.nodes.take(index);

        let contents = match &mut self.state {
            Empty => unreachable!("unlinked node {index} from an empty list"),
            Full(contents) => contents,
        };

        match contents.len.checked_sub(1) {
            None => self.state = Empty,
            Some(new_len) => {
                contents.len = new_len;
                match (node.prev, node.next) {
                    (Some(prev), Some(next)) => {
                        self.nodes.node_mut(prev).next = Some(next);
                        self.nodes.node_mut(next).prev = Some(prev);
                    },
                    (None, Some(next)) => {
                        self.nodes.node_mut(next).prev = None;
                        contents.head = next;
                    },
                    (Some(prev), None) => {
                        self.nodes.node_mut(prev).next = None;
                        contents.tail = prev;
                    },
                    (None, None) => unreachable!(
                        "lone node {index} in a list of {} nodes",
                        new_len.get() + 1
                    ),
                }
            },
        }

        node.value
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<usize, IndexOutOfBounds> {
        let len = self.len();
        if index < len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }

    /// Walks to the node at `index` from whichever end is closer. `index` must be in bounds.
    pub(crate) fn seek(&self, index: usize) -> usize {
        let (head, tail) = match self.state {
            Empty => unreachable!("seeking index {index} in an empty list"),
            Full(ListContents { head, tail, .. }) => (head, tail),
        };
        let len = self.len();

        if index < len / 2 {
            let mut curr = head;
            for _ in 0..index {
                curr = self.step(self.nodes.next(curr));
            }
            curr
        } else {
            let mut curr = tail;
            for _ in index..len - 1 {
                curr = self.step(self.nodes.prev(curr));
            }
            curr
        }
    }

    fn step(&self, link: Link) -> usize {
        match link {
            Some(index) => index,
            None => unreachable!("list links are shorter than its length of {}", self.len()),
        }
    }

    /// Asserts that the links in both directions agree with each other and with the length.
    ///
    /// # Panics
    /// Panics if any link is inconsistent.
    #[allow(dead_code)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert_eq!(self.nodes.prev(head), None, "head must not have a previous node");
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.nodes.next(curr) {
                    assert_eq!(self.nodes.prev(next), Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(tail, curr, "walking forward from head must end at tail");
                assert_eq!(count, len.get(), "forward walk must visit exactly len nodes");
            },
        }
    }
}

impl<T, E: Equivalence<T>> Collection<T> for LinkedList<T, E> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>
        = ListCursor<'a, T, E>
    where
        Self: 'a;

    type Equivalence = E;

    type OfferError = Infallible;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }

    fn cursor(&mut self) -> ListCursor<'_, T, E> {
        LinkedList::cursor(self)
    }

    fn equivalence(&self) -> &E {
        &self.equivalence
    }

    fn offer(&mut self, value: T) -> Result<bool, Infallible> {
        Ok(LinkedList::offer(self, value))
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T, E: Equivalence<T> + Clone> List<T> for LinkedList<T, E> {
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        LinkedList::try_get(self, index)
    }

    fn sort_by<F: FnMut(&T, &T) -> std::cmp::Ordering>(&mut self, compare: F) {
        LinkedList::sort_by(self, compare)
    }

    fn sub_list(&self, from: usize, to: usize) -> Result<Self, IllegalRange>
    where
        T: Clone,
    {
        LinkedList::sub_list(self, from, to)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        Ok(LinkedList::try_set(self, index, value)?)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        LinkedList::try_insert(self, index, value)?;
        Ok(())
    }

    fn try_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        Ok(LinkedList::try_remove_at(self, index)?)
    }
}

impl<T, E: Equivalence<T>> Queue<T> for LinkedList<T, E> {
    fn poll(&mut self) -> Option<T> {
        LinkedList::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        LinkedList::peek(self)
    }
}

impl<T, E> Index<usize> for LinkedList<T, E> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T, E> IndexMut<usize> for LinkedList<T, E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.link_last(item);
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, E, F> PartialEq<LinkedList<T, F>> for LinkedList<T, E> {
    fn eq(&self, other: &LinkedList<T, F>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, E> Eq for LinkedList<T, E> {}

impl<T: Hash, E> Hash for LinkedList<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug, E> Debug for LinkedList<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("max_len", &self.max_len())
            .finish()
    }
}

impl<T: Display, E> Display for LinkedList<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}
