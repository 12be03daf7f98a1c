use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};
use std::num::NonZero;

use tracing::{debug, trace};

use super::{Iter, QueueCursor, QueueOptions};
use crate::collections::traits::{Collection, Comparator, Equivalence, Natural, Queue, ValueEq};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IllegalArguments, QueueFull};
use crate::util::fmt::{DebugEntries, write_elements};

/// The capacity of a [`PriorityQueue`] when none is provided.
pub const DEFAULT_CAPACITY: usize = 50;

const DEFAULT_NON_ZERO: NonZero<usize> = match NonZero::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("DEFAULT_CAPACITY must be at least 1"),
};

/// A priority queue backed by a binary heap, with a fixed capacity and a configurable ordering.
///
/// The element which compares as the smallest according to the queue's [`Comparator`] sits at the
/// head, so with the default [`Natural`] ordering this is a min-queue. Use [`Comparator::reversed`]
/// (or [`QueueOptions::reversed`]) for a max-queue.
///
/// The capacity is fixed at construction. Offering an element to a full queue fails with
/// [`QueueFull`], rather than returning `false` as other `offer` methods in this crate do.
///
/// Iteration (including [`cursor`](PriorityQueue::cursor), [`iter`](PriorityQueue::iter) and
/// [`to_vec`](Collection::to_vec)) follows the order of the backing array, not priority order. See
/// [`into_sorted_vec`](PriorityQueue::into_sorted_vec) for the latter.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `offer` | `O(log n)` |
/// | `poll` | `O(log n)` |
/// | `contains` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_if` | `O(n)` |
#[derive(Clone)]
pub struct PriorityQueue<T, C = Natural, E = ValueEq> {
    pub(crate) data: Vec<T>,
    pub(crate) capacity: NonZero<usize>,
    pub(crate) comparator: C,
    pub(crate) equivalence: E,
}


impl<T> PriorityQueue<T> {
    /// Creates an empty PriorityQueue with [`DEFAULT_CAPACITY`] and [`Natural`] ordering.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::from_parts(DEFAULT_NON_ZERO, Natural, ValueEq)
    }

    /// Creates an empty PriorityQueue with room for `capacity` elements and [`Natural`] ordering.
    ///
    /// Fails with [`IllegalArguments`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<PriorityQueue<T>, IllegalArguments> {
        QueueOptions::new().capacity(capacity).build()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty PriorityQueue with [`DEFAULT_CAPACITY`], ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> PriorityQueue<T, C> {
        PriorityQueue::from_parts(DEFAULT_NON_ZERO, comparator, ValueEq)
    }
}

impl<T, C, E> PriorityQueue<T, C, E> {
    pub(crate) fn from_parts(capacity: NonZero<usize>, comparator: C, equivalence: E) -> Self {
        PriorityQueue {
            data: Vec::with_capacity(capacity.get()),
            capacity,
            comparator,
            equivalence,
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum number of elements the queue can hold.
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the head of the queue without removing it, if the queue isn't empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Like [`peek`](PriorityQueue::peek), but fails with [`EmptyCollection`] instead of returning
    /// [`None`].
    pub fn element(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    /// Returns the ordering used by this queue.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the equivalence used to search this queue.
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns the backing array. Only the first element is in a meaningful position.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue, returning the backing array as is.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Comparator<T>, E> PriorityQueue<T, C, E> {
    /// Returns a [`QueueCursor`] positioned before the first slot.
    pub fn cursor(&mut self) -> QueueCursor<'_, T, C, E> {
        QueueCursor::new(self)
    }

    /// Inserts `value` into the queue.
    ///
    /// Fails with [`QueueFull`] if the queue is already at capacity, in which case `value` is
    /// dropped.
    pub fn offer(&mut self, value: T) -> Result<(), QueueFull> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "priority queue rejected offer: queue is full");
            return Err(QueueFull {
                capacity: self.capacity(),
            });
        }

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Equivalent to [`offer`](PriorityQueue::offer).
    pub fn add(&mut self, value: T) -> Result<(), QueueFull> {
        self.offer(value)
    }

    /// Removes and returns the head of the queue, if the queue isn't empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let head = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(head)
    }

    /// Consumes the queue, returning its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Restores the heap order over the whole backing array.
    pub(crate) fn heapify(&mut self) {
        trace!(len = self.len(), "rebuilding priority queue heap");
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Removes the element in slot `index`. The last element is moved into the emptied slot and
    /// sifted down, or up if it can't move down.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }

        let value = self.data.swap_remove(index);
        if index < self.data.len() && self.sift_down(index) == index {
            self.sift_up(index);
        }
        Some(value)
    }

    /// Removes the element in slot `index` on behalf of a cursor which has visited every slot
    /// before it. Like [`remove_at`](PriorityQueue::remove_at), the slot is refilled from the end
    /// of the backing array, but a filler which would have to rise above the slot is pushed onto
    /// `displaced` instead, so that every unvisited element stays at or after `index`.
    ///
    /// Displaced elements are outside of the heap until they are passed to
    /// [`restore`](PriorityQueue::restore).
    pub(crate) fn take_slot(&mut self, index: usize, displaced: &mut VecDeque<T>) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }

        let value = self.data.swap_remove(index);
        while index > 0
            && index < self.data.len()
            && self.comparator.less(&self.data[index], &self.data[(index - 1) / 2])
        {
            displaced.push_back(self.data.swap_remove(index));
        }
        if index < self.data.len() {
            self.sift_down(index);
        }
        Some(value)
    }

    /// Puts back an element previously taken out by [`take_slot`](PriorityQueue::take_slot). This
    /// skips the capacity check, as the element's slot was freed when it was taken.
    pub(crate) fn restore(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Moves the element at `index` towards the root while it is less than its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.comparator.less(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves while it is greater than the lesser of its
    /// children, returning where it ends up. Ties between children go to the left one.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let mut child = 2 * index + 1;
            if child >= len {
                break;
            }

            let right = child + 1;
            if right < len && self.comparator.greater(&self.data[child], &self.data[right]) {
                child = right;
            }

            if !self.comparator.greater(&self.data[index], &self.data[child]) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
        index
    }

    /// Asserts that no element is less than its parent.
    ///
    /// # Panics
    /// Panics if the heap order is violated.
    #[allow(dead_code)]
    pub(crate) fn verify_heap_order(&self) {
        for index in 1..self.data.len() {
            let parent = (index - 1) / 2;
            assert!(
                !self.comparator.less(&self.data[index], &self.data[parent]),
                "element at slot {index} is less than its parent at slot {parent}"
            );
        }
    }
}

impl<T, C: Comparator<T>, E: Equivalence<T>> Collection<T> for PriorityQueue<T, C, E> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>
        = QueueCursor<'a, T, C, E>
    where
        Self: 'a;

    type Equivalence = E;

    type OfferError = QueueFull;

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T>
    where
        T: 'a,
    {
        PriorityQueue::iter(self)
    }

    fn cursor(&mut self) -> QueueCursor<'_, T, C, E> {
        PriorityQueue::cursor(self)
    }

    fn equivalence(&self) -> &E {
        &self.equivalence
    }

    fn offer(&mut self, value: T) -> Result<bool, QueueFull> {
        PriorityQueue::offer(self, value)?;
        Ok(true)
    }

    /// Removes the first element, in array order, which is equivalent to `item`.
    fn remove(&mut self, item: &T) -> bool {
        let equivalence = &self.equivalence;
        let position = self
            .data
            .iter()
            .position(|element| equivalence.equivalent(element, item));
        position.and_then(|index| self.remove_at(index)).is_some()
    }

    /// Removes every element matching `filter`, deciding on all of them before anything moves,
    /// then rebuilds the heap.
    fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut filter: F) -> bool {
        let len = self.data.len();
        self.data.retain(|element| !filter(element));

        let removed = self.data.len() != len;
        if removed {
            self.heapify();
        }
        removed
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }
}

impl<T, C: Comparator<T>, E: Equivalence<T>> Queue<T> for PriorityQueue<T, C, E> {
    fn poll(&mut self) -> Option<T> {
        PriorityQueue::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, C, E> Debug for PriorityQueue<T, C, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Display, C, E> Display for PriorityQueue<T, C, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}
